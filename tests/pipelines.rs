use rust_array_manip::prelude::*;

fn orders() -> Vec<Value> {
    parse_json_array(
        r#"
{"id":1,"customer":{"name":"Ada","tier":"gold"},"total":120.5,"budget":100,"items":3}
{"id":2,"customer":{"name":"Grace","tier":"silver"},"total":40,"budget":50,"items":1}
{"id":3,"customer":{"name":"Linus","tier":"gold"},"total":75,"budget":80,"items":2}
{"id":4,"customer":{"name":"Barbara","tier":"bronze"},"total":300,"budget":250,"items":7}
"#,
    )
    .unwrap()
}

fn ids(items: &[Value]) -> Vec<i64> {
    items.iter().filter_map(|v| v.get_path("id").as_i64()).collect()
}

#[test]
fn filter_by_nested_membership() {
    let premium = filter(&orders(), &prop("customer.tier").in_set(parse_json(r#"["gold","silver"]"#).unwrap()));
    assert_eq!(ids(&premium), vec![1, 2, 3]);
}

#[test]
fn filter_comparing_two_properties_of_the_same_record() {
    let over_budget = filter(&orders(), &prop("total").op(">", prop("budget")));
    assert_eq!(ids(&over_budget), vec![1, 4]);
}

#[test]
fn map_projects_records() {
    let summary = map(
        &orders(),
        &to_obj([
            ("who", Slot::from(prop("customer.name"))),
            ("avg", Slot::from(prop("total").op("/", prop("items")))),
            ("row", Slot::from(index())),
        ]),
    );
    assert_eq!(summary[0].get_path("who"), Value::from("Ada"));
    assert_eq!(summary[3].get_path("avg"), Value::Float64(300.0 / 7.0));
    assert_eq!(summary[2].get_path("avg"), Value::Float64(37.5));
    assert_eq!(summary[2].get_path("row"), Value::Int64(2));
}

#[test]
fn sort_by_path_and_transform() {
    let items = orders();
    assert_eq!(ids(&sort(&items, &by("total", None))), vec![2, 3, 1, 4]);
    assert_eq!(ids(&sort(&items, &by("total", Direction::Decreasing))), vec![4, 1, 3, 2]);
    assert_eq!(ids(&sort(&items, &by("customer.name", None))), vec![1, 4, 2, 3]);

    let slack = prop("budget").op("-", prop("total"));
    assert_eq!(ids(&sort(&items, &by(slack, None))), vec![4, 1, 3, 2]);
}

#[test]
fn sort_names_alphabetically() {
    let names = map(&orders(), &prop("customer.name"));
    let sorted = sort(&names, &by("alpha", None));
    assert_eq!(
        sorted,
        vec![Value::from("Ada"), Value::from("Barbara"), Value::from("Grace"), Value::from("Linus")]
    );
}

#[test]
fn reduce_sum_and_max_of_projected_values() {
    let totals = map(&orders(), &prop("items"));
    assert_eq!(reduce(&totals, &op("+", Operand::UseItem), None), Some(Value::Int64(13)));
    assert_eq!(reduce(&totals, &op("max", Operand::UseItem), None), Some(Value::Int64(7)));
    assert_eq!(reduce_op(&orders(), &prop("items"), ReduceOp::Sum), Value::Int64(13));
    assert_eq!(reduce_op(&orders(), &prop("total"), ReduceOp::Min), Value::Int64(40));
}

#[test]
fn min_index_over_primitives_and_records() {
    let xs = parse_json_array("[5,1,9,1]").unwrap();
    assert_eq!(MinIndex::default().reduce(&xs), Some(1));
    assert_eq!(min_index(item()).reduce(&xs), Some(1));
    assert_eq!(min_index(prop("total")).reduce(&orders()), Some(1));
}

#[test]
fn operations_leave_input_untouched() {
    let items = orders();
    let before = items.clone();
    let _ = filter(&items, &prop("id").op(">", 2));
    let _ = map(&items, &prop("id").op("*", 10));
    let _ = sort(&items, &by("id", Direction::Decreasing));
    assert_eq!(items, before);
}
