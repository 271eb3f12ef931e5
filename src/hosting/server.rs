use super::*;
use crate::gameroom::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let state = web::Data::new(Lobby::new(config.settings()));
        let origins = config.origins.clone();
        log::info!(
            "starting hosting server on {} ({} workers, depth {}, delay {}ms)",
            config.bind,
            config.workers,
            config.depth,
            config.delay_ms
        );
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(cors(&origins))
                .app_data(state.clone())
                .route("/", web::get().to(index))
                .route("/health", web::get().to(health))
                .route("/ws", web::get().to(enter))
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await?;
        Ok(())
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header();
    match origins.is_empty() {
        true => cors.allow_any_origin(),
        false => origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Connect Four Backend</h1>")
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn enter(lobby: web::Data<Lobby>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(lobby.into_inner(), session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn landing_and_health() {
        let app = test::init_service(
            App::new()
                .route("/", web::get().to(index))
                .route("/health", web::get().to(health)),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<h1>Connect Four Backend</h1>");
        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "ok");
    }
}
