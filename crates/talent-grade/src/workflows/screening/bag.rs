use super::domain::FieldValue;

const BAG_SEPARATOR: &str = " | ";

/// Joins the present source fields into a single search corpus.
pub fn build_bag(values: &[Option<&FieldValue>]) -> String {
    values
        .iter()
        .flatten()
        .map(|value| value.render())
        .collect::<Vec<_>>()
        .join(BAG_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_values_and_flattens_lists() {
        let career = FieldValue::from("보험 영업");
        let skills = FieldValue::from(vec!["엑셀", "CRM"]);

        let bag = build_bag(&[Some(&career), None, Some(&skills)]);

        assert_eq!(bag, "보험 영업 | 엑셀 CRM");
    }

    #[test]
    fn empty_inputs_produce_empty_bag() {
        assert_eq!(build_bag(&[None, None]), "");
        assert_eq!(build_bag(&[]), "");
    }
}
