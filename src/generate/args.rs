//! Command-line arguments for `gounit gen`.

use crate::types::{GenerationRequest, GounitSettings};

/// Builds the argument list for a generation.
///
/// Order is fixed: `gen -i <file>`, then the configured flags verbatim, then
/// `-l <line>` for single-function requests.
///
/// ```
/// use gounit_ide::generate::args::build_args;
/// use gounit_ide::types::{GenerationRequest, GounitSettings};
///
/// let request = GenerationRequest::function("/a/b.go", 42, "Foo");
/// let args = build_args(&request, &GounitSettings::default());
/// assert_eq!(args, ["gen", "-i", "/a/b.go", "-l", "42"]);
/// ```
#[must_use]
pub fn build_args(request: &GenerationRequest, settings: &GounitSettings) -> Vec<String> {
    let mut args = vec![
        "gen".to_string(),
        "-i".to_string(),
        request.file_path.to_string_lossy().into_owned(),
    ];

    args.extend(settings.flags.iter().cloned());

    if let Some(line) = request.function_line {
        args.push("-l".to_string());
        args.push(line.to_string());
    }

    args
}

/// Renders a command line for logs and error messages.
#[must_use]
pub fn display_command(tool: &str, args: &[String]) -> String {
    std::iter::once(tool)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
