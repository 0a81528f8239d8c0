use anyhow::anyhow;
use axum::{
    extract::Request, http, middleware::Next, response::Response,
};
use entity::prelude::*;
use jsonwebtoken::{decode, DecodingKey, Validation};
use repository::Repository;
use serde::{Deserialize, Serialize};

use crate::JWT_SECRET;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

/// The viewer a request carries. Anonymous when the token is missing,
/// malformed or expired.
#[derive(Clone, Debug, Default)]
pub struct Viewer(pub Option<Claims>);

pub async fn identify(mut req: Request, next: Next) -> Response {
    let claims = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .and_then(|token| {
            decode::<Claims>(
                token,
                &DecodingKey::from_secret(
                    JWT_SECRET.get().unwrap().as_bytes(),
                ),
                &Validation::default(),
            )
            .ok()
        })
        .map(|data| data.claims);

    req.extensions_mut().insert(Viewer(claims));

    next.run(req).await
}

/// Resolves the local row for the token subject, creating it on first
/// sight with the username the identity provider vouches for.
pub async fn current_user(
    repository: &Repository,
    claims: &Claims,
) -> anyhow::Result<UserEntity> {
    let user = repository.user.find_by_sub(&claims.sub).await?;

    if let Some(user) = user {
        return Ok(user);
    }

    let id = repository
        .user
        .save(UserEntity {
            sub: claims.sub.clone(),
            username: claims.username.clone(),
            ..Default::default()
        })
        .await?;

    let user = repository.user.find_by_id(id).await?;
    user.ok_or_else(|| anyhow!("failed to get user. id: {}", id))
}
