//! Fortran interface module generator
//!
//! Renders a [`ParsedHeader`] as a single Fortran module: integer parameters
//! for every define and enum member, an `INTERFACE` block with one
//! `BIND(C)` function per declaration, then `PUBLIC` lists.

use crate::error::EmitResult;
use crate::options::EmitOptions;
use crate::types::FortranArg;
use fgen_header::{Constant, EnumMember, FunctionDecl, ParsedHeader};

const PUBLIC_PREFIX: &str = "  PUBLIC ";
const CONTINUATION_PREFIX: &str = "    & ";
const LINE_BREAK: &str = ", &";
const SEPARATOR: &str = ", ";

/// Generator for one Fortran interface module
pub struct ModuleGenerator<'a> {
    header: &'a ParsedHeader,
    options: &'a EmitOptions,
}

impl<'a> ModuleGenerator<'a> {
    /// Create a generator, rejecting options that cannot produce a valid module
    pub fn new(header: &'a ParsedHeader, options: &'a EmitOptions) -> EmitResult<Self> {
        options.validate()?;
        Ok(Self { header, options })
    }

    /// Generate the complete module source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.generate_banner());

        for define in &self.header.defines {
            output.push_str(&constant_line(&define.name, &define.value));
            output.push('\n');
        }

        for group in &self.header.enums {
            for member in &group.members {
                output.push_str(&constant_line(&member.name, &member.value.to_string()));
            }
            output.push('\n');
        }

        output.push_str("  INTERFACE\n");
        for function in &self.header.functions {
            output.push_str(&generate_function(function));
            output.push('\n');
        }
        output.push_str("  END INTERFACE\n\n");

        output.push_str(&self.generate_exports());

        output.push_str(&format!("END MODULE {}\n", self.options.module_name));

        tracing::info!(
            module = %self.options.module_name,
            functions = self.header.functions.len(),
            bytes = output.len(),
            "generated Fortran module"
        );
        output
    }

    fn generate_banner(&self) -> String {
        let mut output = format!(
            "!This file was automatically generated from {}",
            self.options.source_name
        );
        if let Some(ref stamp) = self.options.stamp {
            output.push_str(&format!(" on {}", stamp));
        }
        output.push('\n');
        output.push_str(&format!("MODULE {}\n\n", self.options.module_name));
        output.push_str("  USE ISO_C_BINDING\n\n");
        output.push_str("  IMPLICIT NONE\n\n");
        output
    }

    /// `PUBLIC` lists for functions, then each enum group, then defines
    fn generate_exports(&self) -> String {
        let budget = self.options.line_budget;
        let mut output = String::new();

        let mut push_list = |lines: Vec<String>| {
            if lines.is_empty() {
                return;
            }
            for line in lines {
                output.push_str(&line);
                output.push('\n');
            }
            output.push('\n');
        };

        push_list(wrap_public(
            self.header.functions.iter().map(|f: &FunctionDecl| f.name.as_str()),
            budget,
        ));
        for group in &self.header.enums {
            push_list(wrap_public(
                group.members.iter().map(|m: &EnumMember| m.name.as_str()),
                budget,
            ));
        }
        push_list(wrap_public(
            self.header.defines.iter().map(|c: &Constant| c.name.as_str()),
            budget,
        ));

        output
    }
}

/// Generate a module from a scanned header in one call
pub fn generate_module(header: &ParsedHeader, options: &EmitOptions) -> EmitResult<String> {
    Ok(ModuleGenerator::new(header, options)?.generate())
}

fn constant_line(name: &str, value: &str) -> String {
    format!("  INTEGER(C_INT), PARAMETER :: {} = {}\n", name, value)
}

/// Render one interface body. Every function returns `INTEGER(C_INT)` and
/// links against its own name.
fn generate_function(function: &FunctionDecl) -> String {
    let name = function.name.as_str();
    let mut output = format!("    FUNCTION {}(", name);
    let params: Vec<&str> = function.param_names().collect();
    if !params.is_empty() {
        output.push(' ');
        output.push_str(&params.join(", "));
    }
    output.push_str(" ) &\n");
    output.push_str(&format!("      & BIND(C,NAME=\"{}\")\n", name));
    output.push_str("      USE ISO_C_BINDING\n");

    for param in &function.params {
        let arg = FortranArg::from_c_type(&param.ty);
        tracing::trace!(function = name, param = %param.name, c_type = %param.ty, fortran = %arg, "mapped parameter");
        output.push_str("      ");
        output.push_str(&arg.declaration(&param.name));
        output.push('\n');
    }

    output.push_str(&format!("      INTEGER(C_INT) :: {}\n", name));
    output.push_str(&format!("    END FUNCTION {}\n", name));
    output
}

/// Lay out a `PUBLIC` statement over as many lines as needed.
///
/// A name joins the current line only if the line would still have room for
/// the `, &` continuation marker afterwards, so no line exceeds `budget`
/// unless a single name is itself wider than the budget. An empty name list
/// produces no lines.
pub fn wrap_public<'n>(names: impl IntoIterator<Item = &'n str>, budget: usize) -> Vec<String> {
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut line = format!("{}{}", PUBLIC_PREFIX, first);

    for name in names {
        if line.len() + SEPARATOR.len() + name.len() + LINE_BREAK.len() > budget {
            line.push_str(LINE_BREAK);
            lines.push(std::mem::replace(&mut line, format!("{}{}", CONTINUATION_PREFIX, name)));
        } else {
            line.push_str(SEPARATOR);
            line.push_str(name);
        }
    }

    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use fgen_header::{parse_header, Param};
    use pretty_assertions::assert_eq;

    fn options() -> EmitOptions {
        EmitOptions::new("WIDGET_API", "widget_api.h")
    }

    #[test]
    fn test_wrap_public_single_line() {
        assert_eq!(wrap_public(["RED", "GREEN", "BLUE"], 120), vec!["  PUBLIC RED, GREEN, BLUE"]);
    }

    #[test]
    fn test_wrap_public_empty() {
        assert!(wrap_public(Vec::<&str>::new(), 120).is_empty());
    }

    #[test]
    fn test_wrap_public_breaks_before_budget() {
        let names: Vec<String> = (0..40).map(|i| format!("FML_ERR_CODE_{:02}", i)).collect();
        let lines = wrap_public(names.iter().map(String::as_str), 120);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 120, "{} chars: {}", line.len(), line);
        }
        for line in &lines[..lines.len() - 1] {
            assert!(line.ends_with(", &"));
        }
        for line in &lines[1..] {
            assert!(line.starts_with("    & "));
        }

        let rejoined: Vec<&str> = lines
            .iter()
            .map(|l| {
                l.trim_start_matches(PUBLIC_PREFIX)
                    .trim_start_matches(CONTINUATION_PREFIX)
                    .trim_end_matches(LINE_BREAK)
            })
            .flat_map(|l| l.split(", "))
            .collect();
        assert_eq!(rejoined, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_wrap_public_exact_fit() {
        // "  PUBLIC AAAA" (13) + ", " + "BBBB" + ", &" = 22
        assert_eq!(wrap_public(["AAAA", "BBBB"], 22), vec!["  PUBLIC AAAA, BBBB"]);
        assert_eq!(
            wrap_public(["AAAA", "BBBB"], 21),
            vec!["  PUBLIC AAAA, &", "    & BBBB"]
        );
    }

    #[test]
    fn test_function_rendering() {
        let function = FunctionDecl {
            name: "Widget_Create".into(),
            params: vec![Param::new("char*", "name"), Param::new("int*", "outHandle")],
        };
        assert_eq!(
            generate_function(&function),
            "    FUNCTION Widget_Create( name, outHandle ) &\n\
             \x20     & BIND(C,NAME=\"Widget_Create\")\n\
             \x20     USE ISO_C_BINDING\n\
             \x20     CHARACTER(KIND=C_CHAR) :: name(*)\n\
             \x20     TYPE(C_PTR), VALUE :: outHandle\n\
             \x20     INTEGER(C_INT) :: Widget_Create\n\
             \x20   END FUNCTION Widget_Create\n"
        );
    }

    #[test]
    fn test_function_without_params() {
        let function = FunctionDecl {
            name: "Widget_Count".into(),
            params: Vec::new(),
        };
        assert!(generate_function(&function).starts_with("    FUNCTION Widget_Count( ) &\n"));
    }

    #[test]
    fn test_define_emitted_verbatim() {
        let header = parse_header("#define MAX_LEN 256\n#define AREA (W * H)\n");
        let output = generate_module(&header, &options()).unwrap();
        assert!(output.contains("  INTEGER(C_INT), PARAMETER :: MAX_LEN = 256\n\n"));
        assert!(output.contains("  INTEGER(C_INT), PARAMETER :: AREA = (W * H)\n"));
        assert!(output.contains("  PUBLIC MAX_LEN, AREA\n"));
    }

    #[test]
    fn test_enum_group_emission() {
        let header = parse_header("enum Colour { RED, GREEN, BLUE };");
        let output = generate_module(&header, &options()).unwrap();
        assert!(output.contains(
            "  INTEGER(C_INT), PARAMETER :: RED = 0\n\
             \x20 INTEGER(C_INT), PARAMETER :: GREEN = 1\n\
             \x20 INTEGER(C_INT), PARAMETER :: BLUE = 2\n\n"
        ));
        assert!(output.contains("  PUBLIC RED, GREEN, BLUE\n"));
    }

    #[test]
    fn test_excluded_function_not_exported() {
        let header = parse_header("char* Widget_GetName( int handle );\nint Widget_Ok( int handle );\n");
        let output = generate_module(&header, &options()).unwrap();
        assert!(!output.contains("Widget_GetName"));
        assert!(output.contains("  PUBLIC Widget_Ok\n"));
    }

    #[test]
    fn test_stamp_in_banner() {
        let header = ParsedHeader::default();
        let options = options().with_stamp("2024-03-01 12:30");
        let output = generate_module(&header, &options).unwrap();
        assert!(output.starts_with(
            "!This file was automatically generated from widget_api.h on 2024-03-01 12:30\n"
        ));
    }

    #[test]
    fn test_empty_header_module() {
        let output = generate_module(&ParsedHeader::default(), &options()).unwrap();
        assert_eq!(
            output,
            "!This file was automatically generated from widget_api.h\n\
             MODULE WIDGET_API\n\
             \n\
             \x20 USE ISO_C_BINDING\n\
             \n\
             \x20 IMPLICIT NONE\n\
             \n\
             \x20 INTERFACE\n\
             \x20 END INTERFACE\n\
             \n\
             END MODULE WIDGET_API\n"
        );
    }

    #[test]
    fn test_invalid_options_rejected() {
        let header = ParsedHeader::default();
        let options = EmitOptions::new("WIDGET_API", "widget_api.h").with_line_budget(5);
        assert!(ModuleGenerator::new(&header, &options).is_err());
    }
}
