use fibload_lib::config::Config;
use fibload_lib::config::RouteLayout;
use tokio::sync::oneshot;

use super::*;

/// Start a server on an ephemeral port, returning its address and the
/// handle to stop it.
async fn start(layout: RouteLayout) -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<Result<()>>) {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let address = listener.local_addr().unwrap();

    let router = Arc::new(Router::from_config(&Config {
        layout,
        ..Config::default()
    }));

    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, router, async move {
        let _ = stopped.await;
    }));

    (address, stop, server)
}

#[tokio::test]
async fn split_layout_over_http_test() {
    let (address, stop, server) = start(RouteLayout::Split).await;

    let unique = reqwest::get(format!("http://{address}/unique?n=10"))
        .await
        .unwrap();
    assert_eq!(200, unique.status().as_u16());
    assert_eq!(
        "text/plain; charset=utf-8",
        unique.headers()["content-type"].to_str().unwrap()
    );
    assert_eq!("55", unique.text().await.unwrap());

    let multiple = reqwest::get(format!("http://{address}/multiple?n=5"))
        .await
        .unwrap();
    assert_eq!(200, multiple.status().as_u16());
    assert!(multiple.text().await.unwrap().ends_with("Fib(5)\t= 5"));

    let missing = reqwest::get(format!("http://{address}/multiple"))
        .await
        .unwrap();
    assert_eq!(400, missing.status().as_u16());
    assert_eq!(
        "Missing n query string parameter",
        missing.text().await.unwrap()
    );

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn single_layout_over_http_test() {
    let (address, stop, server) = start(RouteLayout::Single).await;

    let root = reqwest::get(format!("http://{address}/?n=3")).await.unwrap();
    assert_eq!(200, root.status().as_u16());
    assert_eq!(
        "Fib(1)\t= 1\nFib(2)\t= 1\nFib(3)\t= 2",
        root.text().await.unwrap()
    );

    let invalid = reqwest::get(format!("http://{address}/?n=0")).await.unwrap();
    assert_eq!(400, invalid.status().as_u16());
    assert_eq!("The value of n is invalid", invalid.text().await.unwrap());

    let unique = reqwest::get(format!("http://{address}/unique?n=3"))
        .await
        .unwrap();
    assert_eq!(200, unique.status().as_u16());
    assert_eq!(
        "Fib(1)\t= 1\nFib(2)\t= 1\nFib(3)\t= 2",
        unique.text().await.unwrap()
    );

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn not_found_over_http_test() {
    let (address, stop, server) = start(RouteLayout::Split).await;

    let missing = reqwest::get(format!("http://{address}/fib?n=3"))
        .await
        .unwrap();
    assert_eq!(404, missing.status().as_u16());
    assert_eq!("404 page not found\n", missing.text().await.unwrap());

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn deep_recursion_over_http_test() {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let address = listener.local_addr().unwrap();

    let router = Arc::new(Router::from_config(&Config {
        compute_timeout: Some(std::time::Duration::from_millis(200)),
        ..Config::default()
    }));

    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, router, async move {
        let _ = stopped.await;
    }));

    let deep = reqwest::get(format!("http://{address}/unique?n=100000"))
        .await
        .unwrap();
    assert_eq!(503, deep.status().as_u16());

    let after = reqwest::get(format!("http://{address}/unique?n=10"))
        .await
        .unwrap();
    assert_eq!(200, after.status().as_u16());
    assert_eq!("55", after.text().await.unwrap());

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn bind_taken_address_test() {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let address = listener.local_addr().unwrap();

    assert!(bind(address).await.is_err());
}
