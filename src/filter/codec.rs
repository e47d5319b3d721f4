use super::expr::{FilterExpr, FilterMap, Op};

const SEP: &str = "__";
const FILTER_KEY: &str = "flt";

pub fn decode(query: &str) -> (FilterMap, Vec<String>) {
    let mut filters = FilterMap::new();
    let mut extra = Vec::new();

    for param in query.split('&') {
        let mut segments = param.split('=');
        let key = segments.next().unwrap_or("");
        let Some(value) = segments.next() else {
            continue;
        };

        if !key.contains(FILTER_KEY) {
            extra.push(param.to_string());
            continue;
        }

        let parts: Vec<&str> = value.split(SEP).collect();
        if parts.len() != 3 {
            log::debug!("dropping filter param with bad shape: {param}");
            continue;
        }

        let (field, op_token, expr_value) = (parts[0], parts[1], parts[2]);
        let Some(op) = Op::from_token(op_token) else {
            log::debug!("dropping filter param with unknown operator: {param}");
            continue;
        };

        filters
            .entry(field.to_string())
            .or_default()
            .push(FilterExpr::new(op, expr_value));
    }

    (filters, extra)
}

pub fn encode(filters: &FilterMap, extra: &[String]) -> String {
    let mut pairs = Vec::new();

    for (field, exprs) in filters {
        for expr in exprs {
            pairs.push(format!(
                "{FILTER_KEY}={field}{SEP}{}{SEP}{}",
                expr.op, expr.value
            ));
        }
    }

    pairs.extend(extra.iter().cloned());
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_per_field() {
        let (filters, extra) = decode("flt=age__gte__10&flt=age__lte__20");
        assert!(extra.is_empty());
        assert_eq!(
            filters["age"],
            vec![
                FilterExpr::new(Op::Gte, "10"),
                FilterExpr::new(Op::Lte, "20"),
            ]
        );
    }

    #[test]
    fn test_unknown_operator_dropped() {
        let (filters, _) = decode("flt=age__bogus__5");
        assert!(filters.get("age").is_none());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_bad_segment_count_dropped() {
        let (filters, extra) = decode("flt=onlytwoparts__5");
        assert!(filters.is_empty());
        assert!(extra.is_empty());

        let (filters, _) = decode("flt=a__gte__5__junk");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_extras_preserved_in_order() {
        let (filters, extra) = decode("foo=bar&flt=x__eq__1&baz=qux");
        assert_eq!(filters["x"], vec![FilterExpr::new(Op::Eq, "1")]);
        assert_eq!(extra, vec!["foo=bar".to_string(), "baz=qux".to_string()]);
    }

    #[test]
    fn test_bare_token_ignored() {
        let (filters, extra) = decode("standalone&flt=x__eq__1");
        assert_eq!(filters.len(), 1);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_empty_query() {
        let (filters, extra) = decode("");
        assert!(filters.is_empty());
        assert!(extra.is_empty());
    }

    #[test]
    fn test_loose_filter_key_match() {
        let (filters, extra) = decode("and_flt=size__in__1|2");
        assert_eq!(filters["size"], vec![FilterExpr::new(Op::In, "1|2")]);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_encode_shape() {
        let mut filters = FilterMap::new();
        filters.insert(
            "age".to_string(),
            vec![
                FilterExpr::new(Op::Gte, "10"),
                FilterExpr::new(Op::Lte, "20"),
            ],
        );
        filters.insert(
            "size".to_string(),
            vec![FilterExpr::new(Op::In, "1|3")],
        );

        let qs = encode(&filters, &["page=2".to_string()]);
        assert_eq!(qs, "flt=age__gte__10&flt=age__lte__20&flt=size__in__1|3&page=2");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&FilterMap::new(), &[]), "");
    }

    #[test]
    fn test_round_trip() {
        let (filters, extra) =
            decode("flt=age__gte__10&flt=age__lte__20&foo=bar&flt=status__in__a|b&baz=qux");
        let qs = encode(&filters, &extra);
        let (filters2, extra2) = decode(&qs);
        assert_eq!(filters, filters2);
        assert_eq!(extra, extra2);
    }
}
