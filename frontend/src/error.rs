use thiserror::Error;

/// Reasons an inquiry submission is rejected. The `Display` text is shown to the
/// visitor as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("お名前を正しく入力してください（100文字以内）")]
    Name,
    #[error("メールアドレスを正しく入力してください")]
    Email,
    #[error("電話番号を正しく入力してください")]
    Phone,
    #[error("メッセージは1000文字以内で入力してください")]
    Message,
}

/// Generation was requested before the selection was complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("画像を選択してください")]
    NoProperty,
    #[error("画像を選択してください")]
    NoImage,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
