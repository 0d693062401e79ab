use super::*;

#[test]
fn test_top_n_parse() {
    assert_eq!("10".parse::<TopN>(), Ok(TopN::Limit(10)));
    assert_eq!("ALL".parse::<TopN>(), Ok(TopN::All));
    assert!("0".parse::<TopN>().is_err());
    assert!("-3".parse::<TopN>().is_err());
    assert_eq!(TopN::Limit(5).label(), "Top 5");
    assert_eq!(TopN::All.label(), "All");
}

#[test]
fn test_rank_totals_descending_and_stable() {
    let totals: Totals = vec![("a", 2.0), ("b", 5.0), ("c", 2.0), ("d", 9.0)]
        .into_iter()
        .collect();
    let ranked = rank_totals(&totals, TopN::All);
    let keys = ranked.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["d", "b", "a", "c"]);

    let top2 = rank_totals(&totals, TopN::Limit(2));
    assert_eq!(top2.len(), 2);
    assert_eq!(top2[1], ("b".to_string(), 5.0));

    let many = rank_totals(&totals, TopN::Limit(50));
    assert_eq!(many.len(), 4);
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(0.0), "0");
    assert_eq!(format_count(999.9), "999");
    assert_eq!(format_count(1000.0), "1 000");
    assert_eq!(format_count(1234567.8), "1 234 567");
    assert_eq!(format_count(-45210.0), "-45 210");
    assert_eq!(format_count(1e308), "1e308");
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(10.0), "10");
    assert_eq!(format_value(14.5), "14.5");
}

#[test]
fn test_escape_markup() {
    assert_eq!(
        escape_markup("<a href=\"x\">&'"),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
}
