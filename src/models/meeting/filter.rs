use std::collections::HashMap;

/// Query-param filter for the list endpoint. The original store accepted
/// arbitrary find() parameters; here they are whitelisted to the fields a
/// meeting actually has. Keys are the wire names, values are SQL column
/// expressions — never user input.
const FIELDS: &[(&str, &str)] = &[
    ("agenda", "COALESCE(p_agenda.value, '')"),
    ("location", "COALESCE(p_loc.value, '')"),
    ("related", "COALESCE(p_rel.value, 'None')"),
    ("dateTime", "COALESCE(p_dt.value, '')"),
    ("createBy", "CAST(u.id AS TEXT)"),
];

/// Build an equality WHERE fragment from whitelisted query params.
/// Unknown keys (including `deleted`, which is always forced by the caller)
/// are ignored. Returns ("1=1", []) when nothing matches.
pub fn build_where(query: &HashMap<String, String>) -> (String, Vec<String>) {
    let mut parts: Vec<String> = vec![];
    let mut params: Vec<String> = vec![];

    for (key, col) in FIELDS {
        if let Some(value) = query.get(*key) {
            parts.push(format!("{col} = ?"));
            params.push(value.clone());
        }
    }

    if parts.is_empty() {
        return ("1=1".to_string(), vec![]);
    }
    (parts.join(" AND "), params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_returns_passthrough() {
        let (sql, params) = build_where(&HashMap::new());
        assert_eq!(sql, "1=1");
        assert!(params.is_empty());
    }

    #[test]
    fn single_field_condition() {
        let (sql, params) = build_where(&query(&[("agenda", "Standup")]));
        assert_eq!(sql, "COALESCE(p_agenda.value, '') = ?");
        assert_eq!(params, vec!["Standup"]);
    }

    #[test]
    fn multiple_fields_join_with_and() {
        let (sql, params) = build_where(&query(&[("agenda", "Standup"), ("related", "Contact")]));
        assert_eq!(
            sql,
            "COALESCE(p_agenda.value, '') = ? AND COALESCE(p_rel.value, 'None') = ?"
        );
        assert_eq!(params, vec!["Standup", "Contact"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (sql, params) = build_where(&query(&[("deleted", "true"), ("nonexistent", "x")]));
        assert_eq!(sql, "1=1");
        assert!(params.is_empty());
    }
}
