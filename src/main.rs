use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;

use pilgrim_page::args;
use pilgrim_page::controller::profile::pilgrim_page;
use pilgrim_page::controller::supabase::SupabaseLookup;
use pilgrim_page::storage::LookupGateway;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = args::resolve_config()?;
    let gateway: Arc<dyn LookupGateway> =
        Arc::new(SupabaseLookup::new(&config.supabase_url, &config.supabase_key));

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(gateway.clone()))
            // every method reaches the one handler; OPTIONS is resolved inside
            .route("/", web::route().to(pilgrim_page))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await?;
    Ok(())
}
