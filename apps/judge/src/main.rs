use actix_web::{middleware, web, App, HttpServer};
use janken_judge::routes;
use janken_judge::state::app_state::build_state;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let host = std::env::var("JANKEN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("JANKEN_PORT")
        .unwrap_or_else(|_| "3002".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ JANKEN_PORT must be a valid port number");
            std::process::exit(1);
        });

    let app_state = match build_state().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting janken judge on http://{}:{}", host, port);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
