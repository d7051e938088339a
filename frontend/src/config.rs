/// Base URL prepended to every API path.
///
/// Set `BACKEND_URL` at build time to talk to a backend on another origin; by
/// default requests go to the origin that served the page.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

/// User-visible strings that are not tied to a specific error type.
pub mod messages {
    pub const LOAD_PROPERTIES_FAILED: &str = "物件データの読み込みに失敗しました";
    pub const GENERATION_FAILED: &str = "画像の生成に失敗しました";
    pub const INQUIRY_RECEIVED: &str =
        "お問い合わせありがとうございます。担当者より連絡させていただきます。";
}
