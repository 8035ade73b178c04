use actix_cors::Cors;
use actix_web::{
    get,
    middleware::{self, Condition},
    web::Data,
    App, HttpResponse, HttpServer, Responder,
};
use actix_web_lab::respond::Html;
use clap::Parser;
use people_api::api::people;
use people_api::store::{options::StoreOptions, store::Store};
use std::io;

/// Landing page naming the endpoints
#[get("/")]
async fn index() -> impl Responder {
    Html(
        r#"<html>
  <head><title>People API</title></head>
  <body>
    <h1>People API</h1>
    <ul>
      <li>GET /people</li>
      <li>GET /people/{id}</li>
      <li>POST /people</li>
      <li>PUT /people/{id}</li>
      <li>DELETE /people/{id}</li>
      <li>GET /health</li>
    </ul>
  </body>
</html>"#
            .to_string(),
    )
}

/// Liveness probe
#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// 📇 People REST API server, provides a simple HTTP interface for managing person records
#[derive(Parser, Debug)]
struct Cli {
    /// Port the server will run on
    #[clap(short, long, default_value = "9000")]
    port: u16,

    /// Address the server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let request_manager = Store::start(StoreOptions::default());

    // Set up Ctrl-C handler
    let set_handler_request_manager_clone = request_manager.clone();

    ctrlc::set_handler(move || {
        let shutdown_response = set_handler_request_manager_clone
            .send_shutdown_request()
            .expect("Should not timeout");

        log::info!("Shutting down server: {}", shutdown_response);

        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    log::info!("starting HTTP server on port {}.", args.port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(request_manager.clone()))
            .configure(people::config)
            .service(health_check)
            .service(index)
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
