//!
//! Utility functions.
//!

///
/// Turns an identifier like `EXTRALARGE_DATASET` into `Extralarge Dataset`.
///
pub fn title_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut characters = word.chars();
            match characters.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(characters.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

///
/// Returns the file stem of a dataset's artifacts.
///
pub fn file_stem(dataset: &str) -> String {
    dataset.to_lowercase()
}

#[cfg(test)]
mod tests {
    #[test]
    fn title_case() {
        assert_eq!(super::title_case("MINI_DATASET"), "Mini Dataset");
        assert_eq!(super::title_case("EXTRALARGE_DATASET"), "Extralarge Dataset");
        assert_eq!(super::title_case("SEQUENTIAL"), "Sequential");
        assert_eq!(super::title_case("_A__B_"), "A B");
    }

    #[test]
    fn file_stem() {
        assert_eq!(super::file_stem("STANDARD_DATASET"), "standard_dataset");
    }
}
