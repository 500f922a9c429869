//! Items collected from a header

use smol_str::SmolStr;

/// A parameter of a function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Type token with pointer markers folded in, e.g. `int`, `char*`, `FmlHandle`
    pub ty: SmolStr,
    /// Parameter name
    pub name: SmolStr,
}

impl Param {
    pub fn new(ty: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A function declaration that survived the return-type filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Function name, also used as the link symbol
    pub name: SmolStr,
    /// Parameters in declaration order
    pub params: Vec<Param>,
}

impl FunctionDecl {
    /// Parameter type tokens, positionally matching [`FunctionDecl::param_names`]
    pub fn param_types(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.ty.as_str())
    }

    /// Parameter names in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

/// A `#define NAME VALUE` constant; the value is never evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: SmolStr,
    pub value: String,
}

/// One enumerator and the value assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: SmolStr,
    pub value: i64,
}

/// The members of one `enum { ... };` block, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumGroup {
    pub members: Vec<EnumMember>,
}

impl EnumGroup {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Everything collected from one header, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    pub functions: Vec<FunctionDecl>,
    pub defines: Vec<Constant>,
    pub enums: Vec<EnumGroup>,
}

impl ParsedHeader {
    /// Total number of names the generated module will export
    pub fn exported_count(&self) -> usize {
        self.functions.len()
            + self.defines.len()
            + self.enums.iter().map(|e| e.members.len()).sum::<usize>()
    }
}
