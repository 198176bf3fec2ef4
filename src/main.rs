use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use gig_driver_optimizer::config::EnvironmentConfig;
use gig_driver_optimizer::repositories::Ledger;
use gig_driver_optimizer::services::MapboxClient;
use gig_driver_optimizer::state::AppState;
use gig_driver_optimizer::{build_router, open_storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;

    // Configurar logging: detallado en desarrollo, compacto en el resto
    let subscriber = tracing_subscriber::fmt().with_max_level(config.log_level);
    if config.is_development() {
        subscriber.with_file(true).with_line_number(true).init();
    } else {
        subscriber.compact().with_target(false).init();
    }

    info!("🚗 Gig Driver Optimizer");
    info!("========================");
    info!("🌍 Entorno: {}", config.environment);

    let storage = open_storage(&config)
        .await
        .context("Error abriendo el almacén de datos")?;
    let ledger = Ledger::load(storage)
        .await
        .context("Error cargando los datos guardados")?;

    let provider = MapboxClient::new(config.mapbox_api_url.clone(), config.mapbox_timeout)
        .context("Error creando el cliente HTTP de Mapbox")?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(config, ledger, Arc::new(provider)));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health");
    info!("   GET    /api/orders | POST /api/orders");
    info!("   POST   /api/orders/:id/toggle | DELETE /api/orders/:id");
    info!("   GET    /api/expenses | POST /api/expenses | DELETE /api/expenses/:id");
    info!("   GET    /api/shifts | POST /api/shifts | DELETE /api/shifts/:id");
    info!("   GET    /api/settings | PUT /api/settings");
    info!("   POST   /api/route/optimize | GET /api/route");
    info!("   GET    /api/summary");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
