use std::io::Write;

use rsql_criteria::{
    BuildOptions, Criteria, CustomOperator, Direction, FilterBuilder, FilterExpression, Keywords,
    Operator, Value, encode_component, quote,
};

#[test]
fn builds_the_full_query_string_encoded_and_raw() {
    let mut criteria = Criteria::new();
    criteria
        .filters
        .and(FilterExpression::new("code", Operator::Equal, "abc"));
    criteria.order_by.add("code", Direction::Asc);
    criteria.page_size = Some(10);

    assert_eq!(
        criteria.build(&BuildOptions::default()),
        "$where=code=in=%22abc%22&$orderBy=code%20asc&$pageSize=10&$includeTotalCount=true"
    );
    assert_eq!(
        criteria.build(&BuildOptions::unencoded()),
        "$where=code=in=\"abc\"&$orderBy=code asc&$pageSize=10&$includeTotalCount=true"
    );
}

#[test]
fn builder_output_feeds_straight_into_criteria() {
    let mut criteria = Criteria::new();
    criteria.filters.and(
        FilterBuilder::new()
            .column("blah")
            .equal_to("123")
            .or()
            .column("test")
            .equal_to("456")
            .to_list(),
    );

    assert_eq!(
        criteria.build(&BuildOptions::default()),
        "$where=(blah=in=%22123%22%20or%20test=in=%22456%22)"
    );
}

struct CustomEquals;

impl CustomOperator for CustomEquals {
    fn render(&self, _value: &Value, formatted: &str, should_quote: bool) -> String {
        let rendered = if should_quote {
            quote(formatted)
        } else {
            formatted.to_string()
        };
        format!("=custom={}", encode_component(&rendered))
    }
}

#[test]
fn custom_operators_render_their_own_fragment() {
    let mut criteria = Criteria::new();
    criteria
        .filters
        .and(FilterExpression::custom("blah", CustomEquals, "support"));

    assert_eq!(
        criteria.build(&BuildOptions::default()),
        "$where=blah=custom=%22support%22"
    );
}

#[test]
fn combining_criteria_keeps_only_the_first_ordering_and_paging() {
    let mut first = Criteria::new();
    first
        .filters
        .and(FilterExpression::new("code", Operator::Equal, "abc"));
    first.order_by.add("code", Direction::Asc);
    first.page_size = Some(10);

    let mut second = Criteria::new();
    second
        .filters
        .and(FilterExpression::new("status", Operator::Equal, "open"));
    second.order_by.add("status", Direction::Desc);
    second.page_size = Some(99);
    second.page_number = Some(7);

    first.or(second);

    assert_eq!(
        first.build(&BuildOptions::unencoded()),
        "$where=(code=in=\"abc\" or status=in=\"open\")&$orderBy=code asc&$pageSize=10&$includeTotalCount=true"
    );
}

#[test]
fn keywords_load_from_a_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "where_keyword: \"$filter\"").unwrap();
    writeln!(file, "page_size_keyword: \"$limit\"").unwrap();
    file.flush().unwrap();

    let keywords = Keywords::load(file.path()).unwrap();
    assert_eq!(keywords.where_keyword, "$filter");
    assert_eq!(keywords.page_size_keyword, "$limit");
    assert_eq!(keywords.order_by_keyword, "$orderBy");

    let mut criteria = Criteria::with_keywords(keywords);
    criteria
        .filters
        .and(FilterExpression::new("code", Operator::Equal, "abc"));
    criteria.page_size = Some(5);
    criteria.include_total_count = false;

    assert_eq!(
        criteria.build(&BuildOptions::unencoded()),
        "$filter=code=in=\"abc\"&$limit=5"
    );
}

#[test]
fn a_query_with_every_value_kind() {
    let mut criteria = Criteria::new();
    criteria.filters.and(
        FilterBuilder::new()
            .column("name")
            .contains("Jo")
            .and()
            .column("age")
            .greater_than_or_equal_to(21)
            .and()
            .column("active")
            .equal_to(true)
            .and()
            .column("region")
            .is_in(vec!["north", "south"])
            .and()
            .column("deleted_at")
            .is_null()
            .to_list(),
    );

    assert_eq!(
        criteria.build(&BuildOptions::unencoded()),
        "$where=(name==\"*Jo*\" and age>=21 and active=in=true and region=in=(\"north\",\"south\") and deleted_at==null)"
    );
}
