use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;

mod config;

use config::SiteConfig;

async fn spa(cfg: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.index_file())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cfg = SiteConfig::from_env()?;
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!(
        "serving {} (assets {}) on {}:{}",
        cfg.dist_dir.display(),
        cfg.assets_dir.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        let cfg = data.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(cfg.clone())
            // static assets first so the bundle's `/` mount doesn't shadow them
            .service(Files::new("/assets", &cfg.assets_dir))
            // unknown paths fall back to the SPA shell
            .service(
                Files::new("/", &cfg.dist_dir)
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
