#[actix_web::main]
async fn main() -> std::io::Result<()> {
    agencydesk_server::run().await
}
