use super::*;

#[test]
fn test_style_attribute() {
    assert_eq!(
        normalize(r#"<div style="background-color: red; margin-top: 4px"></div>"#),
        "<div style={{ backgroundColor: 'red', marginTop: '4px' }} />"
    );
}

#[test]
fn test_style_drops_empty_and_malformed_pairs() {
    assert_eq!(
        normalize(r#"<p style=" ; color: blue;;  nonsense ; :orphan">x</p>"#),
        "<p style={{ color: 'blue' }}>x</p>"
    );
    assert_eq!(normalize(r#"<p style="">x</p>"#), "<p style={{}}>x</p>");
}

#[test]
fn test_style_keeps_custom_properties() {
    assert_eq!(
        normalize(r#"<div style="--brand-color: red; color: var(--brand-color)">x</div>"#),
        "<div style={{ '--brand-color': 'red', color: 'var(--brand-color)' }}>x</div>"
    );
    assert_eq!(
        normalize(r#"<div style="--Gap: 4px">x</div>"#),
        "<div style={{ '--Gap': '4px' }}>x</div>"
    );
}

#[test]
fn test_style_single_quotes_and_escaping() {
    assert_eq!(
        normalize(r#"<p style='font-family: "Inter"'>x</p>"#),
        r#"<p style={{ fontFamily: '"Inter"' }}>x</p>"#
    );
    assert_eq!(
        normalize(r#"<p style="font-family: 'Open Sans'">x</p>"#),
        r#"<p style={{ fontFamily: '\'Open Sans\'' }}>x</p>"#
    );
}

#[test]
fn test_style_value_keeps_later_colons() {
    assert_eq!(
        normalize(r#"<p style="background: url(https://x.test/a.png)">x</p>"#),
        "<p style={{ background: 'url(https://x.test/a.png)' }}>x</p>"
    );
}

#[test]
fn test_vendor_prefix() {
    assert_eq!(camel_case("-webkit-transition"), "WebkitTransition");
    assert_eq!(camel_case("border-top-left-radius"), "borderTopLeftRadius");
    assert_eq!(camel_case("color"), "color");
}

#[test]
fn test_class_rename() {
    assert_eq!(
        normalize(r#"<p class="lead">Hi</p>"#),
        r#"<p className="lead">Hi</p>"#
    );
    // Only attribute position is rewritten
    assert_eq!(normalize("<p>class=x</p>"), "<p>class=x</p>");
}

#[test]
fn test_class_rename_target_is_configurable() {
    let options = JsxOptions {
        class_attribute: "class".to_string(),
    };
    assert_eq!(
        normalize_with(r#"<p class="lead">Hi</p>"#, &options),
        r#"<p class="lead">Hi</p>"#
    );
}

#[test]
fn test_svg_attributes() {
    assert_eq!(
        normalize(r#"<path stroke-width="2" fill-rule="evenodd" clip-path="url(#a)">x</path>"#),
        r#"<path strokeWidth="2" fillRule="evenodd" clipPath="url(#a)">x</path>"#
    );
    assert_eq!(
        normalize(r#"<text font-size="12" stop-color="red" marker-end="x">t</text>"#),
        r#"<text fontSize="12" stopColor="red" markerEnd="x">t</text>"#
    );
    assert_eq!(normalize("<p>stroke-width</p>"), "<p>stroke-width</p>");
}

#[test]
fn test_void_tags() {
    assert_eq!(normalize(r#"<img src="a.png">"#), r#"<img src="a.png" />"#);
    assert_eq!(normalize("<br>"), "<br />");
    assert_eq!(normalize("<br/>"), "<br />");
    assert_eq!(normalize("<br    />"), "<br />");
    assert_eq!(normalize(r#"<img src="a.png"/>"#), r#"<img src="a.png" />"#);
    assert_eq!(normalize("<bring>x</bring>"), "<bring>x</bring>");
}

#[test]
fn test_nbsp() {
    assert_eq!(normalize("a&nbsp;b&#160;c&#xA0;d"), "a b c d");
}

#[test]
fn test_empty_element_collapse() {
    assert_eq!(
        normalize(r#"<span class="x"></span>"#),
        r#"<span className="x" />"#
    );
    assert_eq!(normalize("<p></p>"), "<p />");
    assert_eq!(normalize("<div></div>"), "<div />");
    assert_eq!(normalize("<b></i>"), "<b></i>");
    assert_eq!(normalize("<p><br></p>"), "<p><br /></p>");
}

#[test]
fn test_malformed_input_passes_through() {
    for input in ["", "<", "<<>>", "<p class=", "plain text", "</div><div"] {
        let output = normalize(input);
        assert!(!output.is_empty() || input.is_empty());
    }
    assert_eq!(normalize("<p class="), "<p className=");
}

#[test]
fn test_combined_document() {
    let html = concat!(
        r#"<h2 class="title" style="text-align: center">Results</h2>"#,
        "\n",
        r#"<p>Up&nbsp;40%<br><img src="/chart.png" alt=""></p>"#,
        "\n",
        r#"<p class="spacer"></p>"#,
    );
    let expected = concat!(
        r#"<h2 className="title" style={{ textAlign: 'center' }}>Results</h2>"#,
        "\n",
        r#"<p>Up 40%<br /><img src="/chart.png" alt="" /></p>"#,
        "\n",
        r#"<p className="spacer" />"#,
    );
    assert_eq!(normalize(html), expected);
}
