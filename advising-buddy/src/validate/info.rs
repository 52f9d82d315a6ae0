//! Course information display.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use crate::catalog::{Catalog, CatalogError};
use crate::domain::CourseId;

/// Wrap width used when the caller has no preference.
pub const DEFAULT_WRAP_WIDTH: usize = 40;

/// Describe a course as five labelled fields.
///
/// Fields are Name, Description, Credits, Prerequisites and Dependencies,
/// in that order. Each is wrapped to `width` on its own and separated from
/// the next by one blank line. The result never ends in a newline.
///
/// # Examples
///
/// ```
/// use advising_buddy::catalog::Catalog;
/// use advising_buddy::domain::CourseId;
/// use advising_buddy::validate::format_course_info;
///
/// let catalog = Catalog::from_json_str(r#"{
///     "JAPN 101": {"name": "Elementary Japanese I", "description": "",
///                  "credits": "4", "prerequisites": []}
/// }"#).unwrap();
///
/// let info = format_course_info(&CourseId::new("JAPN 101"), &catalog, 40).unwrap();
/// assert!(info.ends_with("Prerequisites:\n\nDependencies:"));
/// ```
pub fn format_course_info(
    id: &CourseId,
    catalog: &Catalog,
    width: usize,
) -> Result<String, CatalogError> {
    let course = catalog.course(id)?;
    let dependencies = catalog.get_dependencies(id)?;

    let fields = [
        format!("Name: {}", course.name),
        format!("Description: {}", course.description),
        format!("Credits: {}", course.credits),
        format!("Prerequisites: {}", join(course.prerequisites.iter())),
        format!("Dependencies: {}", join(dependencies.iter())),
    ];

    Ok(fields
        .iter()
        .map(|field| wrap(field, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn join<'a>(ids: impl Iterator<Item = &'a CourseId>) -> String {
    ids.map(CourseId::as_str).collect::<Vec<_>>().join(", ")
}

/// Wrap one field the way Python's `textwrap.wrap` does by default.
///
/// Greedy first-fit over space-separated words. Newlines and other
/// whitespace characters become spaces and runs of spaces inside a line are
/// kept. Words break after hyphens; overlong words are split. A width of
/// zero is treated as one.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = text.replace(|c: char| c.is_ascii_whitespace(), " ");
    if text.trim().is_empty() {
        return Vec::new();
    }

    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::HyphenSplitter)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    textwrap::wrap(&text, options)
        .into_iter()
        .map(|line| line.trim_start().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
