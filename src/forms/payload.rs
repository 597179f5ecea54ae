use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Request body read as a urlencoded form when the request says so,
/// as JSON otherwise. Parse errors come from the extractor that ran.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<T> JsonOrForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonOrForm<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_URLENCODED {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { form.await.map(|form| JsonOrForm(form.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { json.await.map(|json| JsonOrForm(json.into_inner())) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::AddProduct;
    use actix_web::http::header;
    use actix_web::test::TestRequest;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn form_body_is_read_as_form() {
        let (req, mut payload) = TestRequest::post()
            .insert_header((header::CONTENT_TYPE, FORM_URLENCODED))
            .set_payload("nome=Banana&quantidade=3&valor=1.5")
            .to_http_parts();

        let form = JsonOrForm::<AddProduct>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();

        assert_eq!("Banana", form.name);
        assert_eq!(3, form.quantity);
    }

    #[actix_web::test]
    async fn bad_form_reports_the_form_error() {
        let (req, mut payload) = TestRequest::post()
            .insert_header((header::CONTENT_TYPE, FORM_URLENCODED))
            .set_payload("nome=Banana")
            .to_http_parts();

        let err = JsonOrForm::<AddProduct>::from_request(&req, &mut payload)
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("quantidade"), "{}", message);
        assert_eq!(400, err.as_response_error().status_code().as_u16());
    }

    #[actix_web::test]
    async fn json_body_is_read_as_json() {
        let (req, mut payload) = TestRequest::post()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"nome": "Apple", "quantidade": 1, "valor": 0.5}"#)
            .to_http_parts();

        let form = JsonOrForm::<AddProduct>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();

        assert_eq!("Apple", form.name);
    }
}
