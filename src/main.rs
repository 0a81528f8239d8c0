use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.LOCAL_DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    if let Some(env) = secret_store.get("ENV") {
        if env == "prod" {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let Some(jwt_secret) = secret_store.get("JWT_SECRET") else {
        return Err(Error::BuildPanic("JWT_SECRET was not found".to_string()));
    };
    let Some(config) = secret_store.get("CONFIG") else {
        return Err(Error::BuildPanic("CONFIG was not found".to_string()));
    };
    let config_name = format!("Config{}", config);

    let repository = repository::init_repository(&conn_string)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let router = api::serve(repository, &config_name, jwt_secret)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
