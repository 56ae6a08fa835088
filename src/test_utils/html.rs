use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

/// Parse a full page, e.g. the transactions table.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

/// Parse a fragment, e.g. a dialog swapped into the dialog container.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Check that `html` is a lone out-of-band alert rather than a full error page.
#[track_caller]
pub(crate) fn assert_not_found_alert(html: &Html) {
    let container = Selector::parse("#alert-container[hx-swap-oob]").unwrap();
    assert_eq!(
        html.select(&container).count(),
        1,
        "want one out-of-band alert container"
    );

    let alert = Selector::parse("[role=alert]").unwrap();
    let text = html
        .select(&alert)
        .next()
        .expect("No alert found")
        .text()
        .collect::<String>();
    assert!(text.contains("not found"), "got alert text {text:?}");

    let page_parts = Selector::parse("title, #dialog-container").unwrap();
    assert!(
        html.select(&page_parts).next().is_none(),
        "want an alert fragment, got a full page"
    );
}
