use clap::Parser;
use slides_archiver::{logger, Options, SlidesArchiver};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let options = Options::parse();
    logger::init(options.log_format);
    SlidesArchiver::new(options)
        .run()
        .await
}
