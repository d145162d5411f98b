use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http,
    web::Data,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use base64::Engine;
use futures::future::LocalBoxFuture;

use crate::{db_utils::AppState, messages::auth::AuthenticateMessage, models::user::User};

/// The authenticated caller, inserted into request extensions by
/// [`RequireAuth`] and handed to handlers through `FromRequest`.
#[derive(Clone)]
pub struct AuthedUser(pub User);

impl FromRequest for AuthedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthedUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Not Authorized!")),
        )
    }
}

pub fn decode_basic_credentials(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Re-authenticates every request from its `Authorization: Basic` header.
/// No token or session state is kept anywhere.
pub struct RequireAuth {
    admin_only: bool,
}

impl RequireAuth {
    pub fn any_role() -> Self {
        RequireAuth { admin_only: false }
    }
    pub fn admin_only() -> Self {
        RequireAuth { admin_only: true }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            admin_only: self.admin_only,
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
    admin_only: bool,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);
    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let admin_only = self.admin_only;
        Box::pin(async move {
            let credentials = req
                .headers()
                .get(http::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(decode_basic_credentials);
            let Some((username, password)) = credentials else {
                return Err(ErrorUnauthorized("Not Authorized!"));
            };
            let Some(app_state) = req.app_data::<Data<AppState>>() else {
                return Err(ErrorUnauthorized("Not Authorized!"));
            };
            let resolved = app_state
                .db
                .send(AuthenticateMessage { username, password })
                .await;
            match resolved {
                Ok(Ok(user)) => {
                    if admin_only && !user.is_admin() {
                        return Err(ErrorUnauthorized("Not Authorized!"));
                    }
                    req.extensions_mut().insert(AuthedUser(user));
                    service.call(req).await
                }
                _ => Err(ErrorUnauthorized("Not Authorized!")),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::decode_basic_credentials;

    #[test]
    fn decodes_well_formed_header() {
        // "budi:rahasia"
        let creds = decode_basic_credentials("Basic YnVkaTpyYWhhc2lh").unwrap();
        assert_eq!(creds, ("budi".to_string(), "rahasia".to_string()));
    }

    #[test]
    fn password_may_contain_colons() {
        // "budi:a:b"
        let creds = decode_basic_credentials("Basic YnVkaTphOmI=").unwrap();
        assert_eq!(creds, ("budi".to_string(), "a:b".to_string()));
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(decode_basic_credentials("Bearer YnVkaTpyYWhhc2lh").is_none());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(decode_basic_credentials("Basic not-base64!!!").is_none());
    }

    #[test]
    fn rejects_missing_separator() {
        // "budirahasia"
        assert!(decode_basic_credentials("Basic YnVkaXJhaGFzaWE=").is_none());
    }
}
