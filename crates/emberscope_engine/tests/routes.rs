use emberscope_engine::{ApiRoutes, FailureKind};
use url::Url;

fn routes(base: &str) -> ApiRoutes {
    ApiRoutes::new(base.parse().expect("base url")).expect("routes")
}

#[test]
fn labels_percent_encodes_the_query() {
    let url = routes("http://localhost:4040").labels("app.cpu{region=\"eu\"}");
    assert_eq!(
        url.as_str(),
        "http://localhost:4040/labels?query=app.cpu%7Bregion%3D%22eu%22%7D"
    );
}

#[test]
fn label_values_carries_label_then_query() {
    let url = routes("http://localhost:4040").label_values("region", "app.cpu");
    assert_eq!(
        url.as_str(),
        "http://localhost:4040/label-values?label=region&query=app.cpu"
    );
}

#[test]
fn names_queries_the_reserved_label() {
    let url = routes("http://localhost:4040").names();
    assert_eq!(
        url.as_str(),
        "http://localhost:4040/label-values?label=__name__"
    );
}

#[test]
fn render_appends_the_format_selector() {
    let render: Url = "http://localhost:4040/render?query=app.cpu&from=now-1h"
        .parse()
        .expect("render url");
    assert_eq!(
        ApiRoutes::render(&render).as_str(),
        "http://localhost:4040/render?query=app.cpu&from=now-1h&format=json"
    );
}

#[test]
fn render_works_without_an_existing_query() {
    let render: Url = "http://localhost:4040/render".parse().expect("render url");
    assert_eq!(
        ApiRoutes::render(&render).as_str(),
        "http://localhost:4040/render?format=json"
    );
}

#[test]
fn base_may_carry_a_path_prefix() {
    let url = routes("http://example.com/profiling/").labels("app.cpu");
    assert_eq!(
        url.as_str(),
        "http://example.com/profiling/labels?query=app.cpu"
    );
}

#[test]
fn opaque_base_urls_are_rejected() {
    let base: Url = "mailto:ops@example.com".parse().expect("mail url");
    let err = ApiRoutes::new(base).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
