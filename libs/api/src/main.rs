use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use util::load_secrets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let secrets = load_secrets("Secrets.dev.toml")?;
    let conn_string =
        secrets.get("LOCAL_DATABASE_URL").unwrap().as_str().unwrap();
    let repository = init_repository(conn_string).await?;

    let jwt_secret = secrets.get("JWT_SECRET").unwrap().as_str().unwrap();

    let config = secrets.get("CONFIG").unwrap().as_str().unwrap();
    let config_name = &format!("Config{}", config);

    let router =
        serve(repository, config_name, jwt_secret.to_string()).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
