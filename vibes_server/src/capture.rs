use serde::Serialize;

use vibes_core::helpers::dto::{CaptureFrame, CapturedImage};
use vibes_core::vibe::engine::{CaptureError, CardCapturer};
use vibes_core::vibe::presentation::NftCard;

/// Card screenshots come from an external renderer: it receives the derived
/// card plus the frame and answers with PNG bytes. Without a configured
/// renderer every capture fails, which the engine degrades to the text-only
/// share path.
#[derive(Debug, Clone)]
pub struct RenderApiCapturer {
    http: reqwest::Client,
    render_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    card: &'a NftCard,
    frame: &'a CaptureFrame,
}

impl RenderApiCapturer {
    pub fn new(render_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            render_url,
        }
    }
}

impl CardCapturer for RenderApiCapturer {
    async fn capture(
        &self,
        card: &NftCard,
        frame: &CaptureFrame,
    ) -> Result<CapturedImage, CaptureError> {
        let Some(render_url) = &self.render_url else {
            return Err(CaptureError::Unconfigured);
        };

        let response = self
            .http
            .post(render_url)
            .json(&RenderRequest { card, frame })
            .send()
            .await
            .map_err(|e| CaptureError::Renderer(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CaptureError::Renderer(format!(
                "renderer returned status {}",
                response.status().as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CaptureError::Renderer(e.to_string()))?;

        Ok(CapturedImage::from_png_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibes_core::helpers::dto::{Nft, VolumeChange};
    use vibes_core::vibe::presentation::CAPTURE_PADDING;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn card() -> NftCard {
        NftCard::from_nft(&Nft {
            id: "c1".to_string(),
            name: "One".to_string(),
            image: "https://img/1.png".to_string(),
            description: String::new(),
            attributes: vec![],
            volume_change: VolumeChange::default(),
        })
    }

    fn frame() -> CaptureFrame {
        CaptureFrame {
            padding: CAPTURE_PADDING,
            background: "#fffbe6".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_renderer_fails_capture() {
        let capturer = RenderApiCapturer::new(None);
        let err = capturer.capture(&card(), &frame()).await.unwrap_err();
        assert!(matches!(err, CaptureError::Unconfigured));
    }

    #[tokio::test]
    async fn test_capture_posts_card_and_returns_data_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "card": {"name": "One"},
                "frame": {"padding": 25, "background": "#fffbe6"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let capturer = RenderApiCapturer::new(Some(server.uri()));
        let image = capturer.capture(&card(), &frame()).await.unwrap();
        assert!(image.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(image.png_bytes().unwrap(), b"png-bytes".to_vec());
    }

    #[tokio::test]
    async fn test_renderer_error_status_fails_capture() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let capturer = RenderApiCapturer::new(Some(server.uri()));
        let err = capturer.capture(&card(), &frame()).await.unwrap_err();
        assert!(matches!(err, CaptureError::Renderer(_)));
    }
}
