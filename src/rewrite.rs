//! Body rewrite rules for exported post content
//!
//! Each rule is a single global find-and-replace over the whole body. The
//! rules run in a fixed order and each one sees only the previous rule's
//! output.

use std::sync::LazyLock;

use regex::Regex;

/// Apply the full rewrite chain to a raw post body.
pub fn rewrite_body(body: &str) -> String {
    let body = strip_more_marker(body);
    let body = wrap_linked_images(&body);
    let body = wrap_caption_shortcodes(&body);
    let body = normalize_img_tags(&body);
    let body = relocate_hosted_images(&body);
    let body = strip_display_posts(&body);
    link_travel_series(&body)
}

/// Strip the `<!--more-->` fold marker WordPress inserts at the summary break.
fn strip_more_marker(body: &str) -> String {
    body.replace("<!--more-->", "")
}

static LINKED_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<a .*?>)(<img.*?>)(?:</a>)").expect("linked image pattern")
});

/// Rewrite `<a ...><img ...></a>` wrapper pairs into a captioned figure.
/// The image markup lands in the caption slot as well as the figure body.
fn wrap_linked_images(body: &str) -> String {
    LINKED_IMAGE
        .replace_all(
            body,
            "<figure class=\"figstyle\">${1}<figcaption class=\"figcapstyle\">${1}</figcaption></figure>\n\n",
        )
        .into_owned()
}

static CAPTION_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[caption.*?\].*(<img.*>)(.*)\[/caption\]").expect("caption shortcode pattern")
});

/// Rewrite `[caption ...]<img ...> text[/caption]` shortcodes into the same
/// figure structure, with the shortcode's trailing text as the caption.
fn wrap_caption_shortcodes(body: &str) -> String {
    CAPTION_SHORTCODE
        .replace_all(
            body,
            "<figure class=\"figstyle\">${1}<figcaption class=\"figcapstyle\">${2}</figcaption></figure>\n\n",
        )
        .into_owned()
}

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img.*src="(.*?)" .*?/?>"#).expect("img tag pattern"));

/// Normalize an `<img>` tag down to its `src`, discarding other attributes.
fn normalize_img_tags(body: &str) -> String {
    IMG_TAG.replace_all(body, "<img src=\"${1}\" />").into_owned()
}

static HOSTED_IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""https?://jennifermackdotnet\.files\.wordpress\.com/\d{4}/\d{2}/(.+\.\w{3,4}).*""#)
        .expect("hosted image url pattern")
});

/// Relocate absolute wordpress.com media URLs to the site-relative image
/// tree, dropping the upload-date path segments and any query string.
fn relocate_hosted_images(body: &str) -> String {
    HOSTED_IMAGE_URL
        .replace_all(body, "\"/images/${1}\"")
        .into_owned()
}

static DISPLAY_POSTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[display-posts.*?\]").expect("display-posts pattern"));

/// Remove `[display-posts ...]` shortcode invocations entirely.
fn strip_display_posts(body: &str) -> String {
    DISPLAY_POSTS.replace_all(body, "").into_owned()
}

/// Replace the travel-series lead-in sentence with a link to the tag page.
fn link_travel_series(body: &str) -> String {
    body.replace(
        "More MVW travel reports:",
        "Use the [MVW Travel tag](/tag/mvw-travel) to see all the posts in this series.",
    )
}
