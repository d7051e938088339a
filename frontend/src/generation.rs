//! Renovation request flow: selection precondition, the backend call and the guard
//! that hands the style buttons back once the request settles.

use crate::error::{AppError, PreconditionError};
use crate::models::{RenovateRequest, RenovationStyle};
use crate::state::{SelectionTag, ViewState};
use crate::utils::api::Backend;

/// Everything needed to issue one renovation request, captured at click time.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub tag: SelectionTag,
    pub style: RenovationStyle,
    pub image_url: String,
}

impl GenerationRequest {
    pub fn from_state(state: &ViewState, style: RenovationStyle) -> Result<Self, PreconditionError> {
        let property_id = state
            .selection
            .property_id
            .clone()
            .ok_or(PreconditionError::NoProperty)?;
        let image_id = state.selection.image_id.clone().ok_or(PreconditionError::NoImage)?;
        let image_url = state.selection.image_url.clone().ok_or(PreconditionError::NoImage)?;
        Ok(Self {
            tag: SelectionTag {
                property_id,
                image_id,
            },
            style,
            image_url,
        })
    }

    pub fn body(&self) -> RenovateRequest {
        RenovateRequest {
            style: self.style.key().to_string(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Sends the request and returns the URL of the generated image.
pub async fn generate<B: Backend>(backend: &B, request: &GenerationRequest) -> Result<String, AppError> {
    let response = backend
        .request_renovation(&request.tag.property_id, &request.tag.image_id, &request.body())
        .await?;
    if let Some(message) = response.message.as_deref() {
        log::info!("Renovation backend says: {}", message);
    }
    response
        .first_output()
        .map(str::to_string)
        .ok_or_else(|| AppError::Generation("response contained no output image".to_string()))
}

/// Runs `release` exactly once when dropped, whichever way the owning scope exits.
pub struct BusyGuard<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> BusyGuard<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::models::{DemoImage, Property, RenovateResponse};
    use crate::state::tests::{loaded, with_image};
    use crate::state::Action;

    #[derive(Default)]
    struct FakeBackend {
        calls: Cell<usize>,
        last_body: RefCell<Option<(String, String, RenovateRequest)>>,
        outcome: RefCell<Option<Result<RenovateResponse, AppError>>>,
    }

    impl FakeBackend {
        fn answering(outcome: Result<RenovateResponse, AppError>) -> Self {
            let backend = Self::default();
            *backend.outcome.borrow_mut() = Some(outcome);
            backend
        }
    }

    impl Backend for FakeBackend {
        async fn list_properties(&self) -> Result<Vec<Property>, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }

        async fn list_demo_images(&self, _property_id: &str) -> Result<Vec<DemoImage>, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }

        async fn request_renovation(
            &self,
            property_id: &str,
            image_id: &str,
            body: &RenovateRequest,
        ) -> Result<RenovateResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() =
                Some((property_id.to_string(), image_id.to_string(), body.clone()));
            self.outcome
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(AppError::Generation("no outcome configured".into())))
        }
    }

    fn response(output: &[&str]) -> RenovateResponse {
        RenovateResponse {
            id: Some("gen-1".into()),
            status: Some("succeeded".into()),
            output: output.iter().map(|s| s.to_string()).collect(),
            style: None,
            message: None,
        }
    }

    #[test]
    fn missing_image_fails_before_any_network_call() {
        let backend = FakeBackend::default();
        let state = loaded().apply(Action::SelectProperty("house1".into()));

        let outcome = GenerationRequest::from_state(&state, RenovationStyle::Modern)
            .map_err(AppError::from)
            .and_then(|request| block_on(generate(&backend, &request)));

        assert_eq!(outcome, Err(AppError::Precondition(PreconditionError::NoImage)));
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn missing_property_is_a_precondition_error() {
        let err = GenerationRequest::from_state(&loaded(), RenovationStyle::Modern).unwrap_err();
        assert_eq!(err, PreconditionError::NoProperty);
        assert_eq!(err.to_string(), "画像を選択してください");
    }

    #[test]
    fn request_carries_selection_and_style() {
        let backend = FakeBackend::answering(Ok(response(&["https://cdn/after.png"])));
        let request = GenerationRequest::from_state(&with_image("house1", "demo1"), RenovationStyle::Showa).unwrap();

        let url = block_on(generate(&backend, &request)).unwrap();

        assert_eq!(url, "https://cdn/after.png");
        assert_eq!(backend.calls.get(), 1);
        let (property_id, image_id, body) = backend.last_body.borrow_mut().take().unwrap();
        assert_eq!(property_id, "house1");
        assert_eq!(image_id, "demo-1700000000000");
        assert_eq!(body.style, "showa");
        assert_eq!(body.image_url, "/static/demo-images/demo1.jpg");
    }

    #[test]
    fn empty_output_is_a_generation_error() {
        let backend = FakeBackend::answering(Ok(response(&[])));
        let request = GenerationRequest::from_state(&with_image("house1", "demo1"), RenovationStyle::Zen).unwrap();
        assert!(matches!(
            block_on(generate(&backend, &request)),
            Err(AppError::Generation(_))
        ));
    }

    #[test]
    fn backend_failure_propagates() {
        let backend = FakeBackend::answering(Err(AppError::Generation("status 500".into())));
        let request = GenerationRequest::from_state(&with_image("house2", "demo4"), RenovationStyle::Eco).unwrap();
        assert_eq!(
            block_on(generate(&backend, &request)),
            Err(AppError::Generation("status 500".into()))
        );
    }

    #[test]
    fn busy_guard_releases_on_every_exit() {
        let released = Cell::new(0);

        let run = |fail: bool| -> Result<(), AppError> {
            let _guard = BusyGuard::new(|| released.set(released.get() + 1));
            if fail {
                return Err(AppError::Generation("boom".into()));
            }
            Ok(())
        };

        assert!(run(false).is_ok());
        assert!(run(true).is_err());
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn busy_guard_releases_after_async_failure() {
        let released = Cell::new(false);
        let backend = FakeBackend::answering(Err(AppError::Generation("status 502".into())));
        let request = GenerationRequest::from_state(&with_image("house1", "demo2"), RenovationStyle::Luxury).unwrap();

        let result = block_on(async {
            let _guard = BusyGuard::new(|| released.set(true));
            generate(&backend, &request).await
        });

        assert!(result.is_err());
        assert!(released.get());
    }
}
