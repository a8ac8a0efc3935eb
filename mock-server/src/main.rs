use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 3000;

/// Loopback address for the given `PORT` value, falling back to 3000 when unset.
fn listen_addr(port: Option<&str>) -> Result<SocketAddr, std::io::Error> {
    let port = match port {
        Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid PORT {raw:?}: {e}"))
        })?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = listen_addr(std::env::var("PORT").ok().as_deref())?;
    let listener = TcpListener::bind(addr).await?;
    println!("mock server listening on http://{}", listener.local_addr()?);
    mock_server::run(listener).await
}
