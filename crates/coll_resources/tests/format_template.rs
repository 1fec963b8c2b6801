use coll_resources::format_template;

#[test]
fn substitutes_positional_args() {
    let out = format_template("Parameter '{0}' must be between {1} and {2}.", &[&"index", &0, &10]);
    assert_eq!(out, "Parameter 'index' must be between 0 and 10.");
}

#[test]
fn args_can_repeat_and_reorder() {
    assert_eq!(format_template("{1}-{0}-{1}", &[&"a", &"b"]), "b-a-b");
}

#[test]
fn doubled_braces_are_literal() {
    assert_eq!(format_template("{{0}} is {0}", &[&7]), "{0} is 7");
    assert_eq!(format_template("}}{{", &[]), "}{");
}

#[test]
fn missing_arg_is_left_verbatim() {
    assert_eq!(format_template("{0} and {3}", &[&"x"]), "x and {3}");
}

#[test]
fn non_numeric_placeholders_are_left_alone() {
    assert_eq!(format_template("{name} {0", &[&1]), "{name} {0");
    assert_eq!(format_template("{}", &[&1]), "{}");
}

#[test]
fn multibyte_text_survives() {
    assert_eq!(
        format_template("参数“{0}”超出范围。", &[&"count"]),
        "参数“count”超出范围。"
    );
}
