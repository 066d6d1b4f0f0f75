use crate::config::SubjectPair;
use crate::dataset::university::{Program, University};

/// True when the program name or its effective category contains any
/// keyword of `pair` or any shared keyword. Case-sensitive.
pub fn is_relevant(
    pair: &SubjectPair,
    shared_keywords: &[String],
    university: &University,
    program: &Program,
) -> bool {
    let category = university.program_category(program);
    pair.keywords
        .iter()
        .chain(shared_keywords)
        .any(|keyword| program.name.contains(keyword.as_str()) || category.contains(keyword.as_str()))
}
