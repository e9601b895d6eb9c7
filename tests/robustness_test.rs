use douban_reviews::access::{classify, PageAccess};
use douban_reviews::{dom, extract, extract_page, ReviewKind};

#[test]
fn empty_input_yields_empty_result() {
    let page = extract("", ReviewKind::Short);
    assert!(page.records.is_empty());
    assert!(page.warnings.is_empty());
}

#[test]
fn whitespace_only_input_yields_empty_result() {
    let page = extract("   \n\t  ", ReviewKind::Long);
    assert!(page.records.is_empty());
}

#[test]
fn page_without_any_container_yields_empty_list() {
    let html = "<html><body><h1>蓝风筝</h1><p>还没有人写过短评</p></body></html>";
    let page = extract(html, ReviewKind::Short);
    assert!(page.records.is_empty());
    assert!(page.warnings.is_empty());
}

#[test]
fn does_not_panic_on_unclosed_tags() {
    let html = r#"<div class="comment-item"><span class="short">truncated"#;
    let page = extract(html, ReviewKind::Short);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].content, "truncated");
}

#[test]
fn does_not_panic_on_invalid_nesting_or_broken_attributes() {
    let page = extract("<p><div></p></div>", ReviewKind::Short);
    assert!(page.records.is_empty());

    let page = extract("<div class=\"comment-item id=broken>", ReviewKind::Long);
    assert!(page.warnings.len() <= 1);
}

#[test]
fn one_failing_item_among_n_yields_n_minus_one_records() {
    let html = r#"
        <div class="comment-item"><span class="short">one</span></div>
        <div class="comment-item"></div>
        <div class="comment-item"><span class="short">three</span></div>
        <div class="comment-item"><span class="short">four</span></div>
    "#;

    let page = extract(html, ReviewKind::Short);
    assert_eq!(page.records.len(), 3);
    assert_eq!(page.warnings.len(), 1);

    let contents: Vec<&str> = page.records.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, ["one", "three", "four"]);
}

#[test]
fn repeated_extraction_of_one_document_is_identical() {
    let html = r#"
        <div class="main review-item">
            <a class="name">reviewer</a>
            <span class="main-meta">2019-06-01 08:12:33</span>
            <div class="short-content">body (展开)</div>
        </div>
    "#;
    let doc = dom::parse(html);

    let first = extract_page(&doc, ReviewKind::Long);
    let second = extract_page(&doc, ReviewKind::Long);
    assert_eq!(first, second);
    assert_eq!(first.records.len(), 1);
    assert_eq!(first.records[0].content, "body");
}

#[test]
fn login_wall_is_triaged_not_extracted() {
    let html = r#"<html><body>
        <p>您尚未登录，请先登录后查看短评。</p>
    </body></html>"#;
    let doc = dom::parse(html);

    assert_eq!(classify(&doc), PageAccess::LoginRequired);
    assert!(extract_page(&doc, ReviewKind::Short).records.is_empty());
}

#[test]
fn bot_interstitial_is_triaged() {
    let html = "<html><body><p>检测到异常请求，疑似机器人。</p></body></html>";
    let doc = dom::parse(html);
    assert_eq!(classify(&doc), PageAccess::BotChallenge);
}

#[test]
fn script_content_is_not_mistaken_for_reviews() {
    let html = r#"<html><body>
        <script>var comments = [{"short": "not a review"}];</script>
        <div class="comment-item"><span class="short">real review</span></div>
    </body></html>"#;

    let page = extract(html, ReviewKind::Short);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].content, "real review");
}
