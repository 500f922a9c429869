//! Type mapping from C parameter types to Fortran dummy arguments.
//!
//! The mapping is intentionally coarse: handles, enums, counts and error codes
//! in the target API are all `int`-sized, so everything that is not a character
//! or a known pointer becomes `INTEGER(C_INT), VALUE`.
//!
//! | C token           | Fortran declaration                  |
//! |-------------------|--------------------------------------|
//! | `char`            | `CHARACTER(KIND=C_CHAR), VALUE :: x` |
//! | `char*`           | `CHARACTER(KIND=C_CHAR) :: x(*)`     |
//! | `int*`, `double*` | `TYPE(C_PTR), VALUE :: x`            |
//! | anything else     | `INTEGER(C_INT), VALUE :: x`         |

use std::fmt;

/// How an argument crosses the C boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passing {
    /// The callee receives a copy of the value
    ByValue,
    /// The callee receives the address of caller storage
    ByReference,
}

/// Fortran-side form of a C parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FortranArg {
    /// A single `char`
    Character,
    /// A `char*` string buffer; its length is the caller's business
    CharacterBuffer,
    /// An `int*` or `double*`, passed through as an opaque address
    Address,
    /// Any other type, treated as a C `int`
    Integer,
}

impl FortranArg {
    /// Map a parameter type token as produced by the header scanner
    /// (pointer markers folded in, `const` dropped).
    pub fn from_c_type(token: &str) -> Self {
        match token {
            "char" => FortranArg::Character,
            "char*" => FortranArg::CharacterBuffer,
            "int*" | "double*" => FortranArg::Address,
            _ => FortranArg::Integer,
        }
    }

    pub fn passing(self) -> Passing {
        match self {
            FortranArg::Character | FortranArg::Integer => Passing::ByValue,
            FortranArg::CharacterBuffer | FortranArg::Address => Passing::ByReference,
        }
    }

    /// Render the dummy-argument declaration for a parameter called `name`
    pub fn declaration(self, name: &str) -> String {
        match self {
            FortranArg::Character => format!("CHARACTER(KIND=C_CHAR), VALUE :: {}", name),
            FortranArg::CharacterBuffer => format!("CHARACTER(KIND=C_CHAR) :: {}(*)", name),
            FortranArg::Address => format!("TYPE(C_PTR), VALUE :: {}", name),
            FortranArg::Integer => format!("INTEGER(C_INT), VALUE :: {}", name),
        }
    }
}

impl fmt::Display for FortranArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FortranArg::Character => write!(f, "CHARACTER(KIND=C_CHAR)"),
            FortranArg::CharacterBuffer => write!(f, "CHARACTER(KIND=C_CHAR)(*)"),
            FortranArg::Address => write!(f, "TYPE(C_PTR)"),
            FortranArg::Integer => write!(f, "INTEGER(C_INT)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mapping_table() {
        assert_eq!(FortranArg::from_c_type("char"), FortranArg::Character);
        assert_eq!(FortranArg::from_c_type("char*"), FortranArg::CharacterBuffer);
        assert_eq!(FortranArg::from_c_type("int*"), FortranArg::Address);
        assert_eq!(FortranArg::from_c_type("double*"), FortranArg::Address);
        assert_eq!(FortranArg::from_c_type("int"), FortranArg::Integer);
        assert_eq!(FortranArg::from_c_type("FmlSessionHandle"), FortranArg::Integer);
        assert_eq!(FortranArg::from_c_type("double"), FortranArg::Integer);
        assert_eq!(FortranArg::from_c_type("char**"), FortranArg::Integer);
    }

    #[test]
    fn test_passing() {
        assert_eq!(FortranArg::Character.passing(), Passing::ByValue);
        assert_eq!(FortranArg::Integer.passing(), Passing::ByValue);
        assert_eq!(FortranArg::CharacterBuffer.passing(), Passing::ByReference);
        assert_eq!(FortranArg::Address.passing(), Passing::ByReference);
    }

    #[test]
    fn test_declarations() {
        assert_eq!(FortranArg::Character.declaration("key"), "CHARACTER(KIND=C_CHAR), VALUE :: key");
        assert_eq!(FortranArg::CharacterBuffer.declaration("name"), "CHARACTER(KIND=C_CHAR) :: name(*)");
        assert_eq!(FortranArg::Address.declaration("out"), "TYPE(C_PTR), VALUE :: out");
        assert_eq!(FortranArg::Integer.declaration("handle"), "INTEGER(C_INT), VALUE :: handle");
    }
}
