// Integration tests for generating parsed templates from simplified urls

mod common;

use url_template::{CompileScope, HideDefaults, ParameterMap, UrlTemplateConfigData, UrlTemplateResolver};

#[test]
fn test_generate_grafts_templates_onto_simplified_url() {
    let resolver = common::standard_resolver();

    let parsed = resolver.generate_parsed_url_template(
        "https://test.test.com/some-path-prefix/what/?s=1&g=2&h",
        common::params(&[("country", "pl"), ("language", "en"), ("param", "ssssssss")]),
    );
    assert_eq!(
        resolver.compile_url(&parsed).unwrap(),
        "https://test.pl.test.com/ssssssss/some-path-prefix/what/?s=1&g=2&h"
    );

    let parsed = resolver.generate_parsed_url_template(
        "https://test.test.com/some-path-prefix/what/?s=1&g=2&h",
        common::params(&[
            ("country", "pl"),
            ("param", "ssssssss"),
            ("city", "london"),
            ("language", "de"),
        ]),
    );
    assert_eq!(
        resolver.compile_url(&parsed).unwrap(),
        "https://test.pl.london.test.com/de/ssssssss/some-path-prefix/what/?s=1&g=2&h"
    );
}

#[test]
fn test_generate_with_fully_templated_path() {
    // no static path text at all, the template is grafted in front
    let resolver = UrlTemplateResolver::new(
        common::standard_config_data()
            .with_path_template("/{language}/{param}")
            .build(),
    );

    let parsed = resolver.generate_parsed_url_template(
        "https://test.test.com/what/?s=1&g=2&h",
        common::params(&[
            ("country", "pl"),
            ("param", "ssssssss"),
            ("city", "london"),
            ("language", "de"),
        ]),
    );
    assert_eq!(
        resolver.compile_url(&parsed).unwrap(),
        "https://test.pl.london.test.com/de/ssssssss/what/?s=1&g=2&h"
    );
}

#[test]
fn test_generate_from_bare_origin() {
    let resolver = UrlTemplateResolver::new(
        UrlTemplateConfigData::new()
            .with_host_template("{country}.test.com")
            .with_path_template("/{language}/{city}/")
            .with_pattern("country", "(tr|uk)")
            .with_pattern("language", "(en|tr)")
            .with_pattern("city", "(istanbul|ankara)")
            .with_default("language", "tr")
            .with_default("city", "istanbul")
            .with_hide_defaults(HideDefaults::Named(vec!["city".to_string()]))
            .with_default_scheme(None)
            .build(),
    );

    let mut parsed = resolver.generate_parsed_url_template("http://test.com/", ParameterMap::new());
    parsed.set_parameters(common::params(&[("country", "tr"), ("language", "en")]));
    assert_eq!(
        resolver.compile_url_part(&parsed, CompileScope::Host).unwrap(),
        "tr.test.com"
    );
    assert_eq!(
        resolver.compile_url_part(&parsed, CompileScope::Path).unwrap(),
        "/en/"
    );

    // same origin without the trailing slash
    let mut parsed = resolver.generate_parsed_url_template("http://test.com", ParameterMap::new());
    parsed.set_parameters(common::params(&[
        ("country", "tr"),
        ("language", "en"),
        ("city", "ankara"),
    ]));
    assert_eq!(
        resolver.compile_url_part(&parsed, CompileScope::Host).unwrap(),
        "tr.test.com"
    );
    assert_eq!(
        resolver.compile_url_part(&parsed, CompileScope::Path).unwrap(),
        "/en/ankara/"
    );
}
