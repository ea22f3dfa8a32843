use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use reino_brinquedos::config::environment::EnvironmentConfig;
use reino_brinquedos::database;
use reino_brinquedos::routes::criar_rotas;
use reino_brinquedos::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🧸 Reino dos Brinquedos - API de Gestão");
    info!("=======================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar banco de dados
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Erro aplicando migrações: {}", e);
        return Err(e);
    }
    info!("✅ Banco de dados pronto");

    // Montar o router da API
    let app_state = AppState::new(pool, config.clone());
    let app = criar_rotas(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Liveness");
    info!("🔑 Autenticação:");
    info!("   POST /api/auth/register - Registrar usuário");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuário autenticado");
    info!("🧑 Clientes:");
    info!("   POST /api/clientes - Cadastrar cliente");
    info!("   GET  /api/clientes - Listar clientes (paginado)");
    info!("   GET  /api/clientes/:id - Obter cliente");
    info!("   PUT  /api/clientes/:id - Atualizar cliente");
    info!("   DELETE /api/clientes/:id - Remover cliente (soft delete)");
    info!("💰 Vendas:");
    info!("   POST /api/vendas - Registrar venda");
    info!("   GET  /api/vendas - Listar vendas");
    info!("   GET  /api/vendas/:id - Obter venda");
    info!("   PUT  /api/vendas/:id - Atualizar venda");
    info!("   DELETE /api/vendas/:id - Remover venda");
    info!("📊 Estatísticas:");
    info!("   GET  /api/estatisticas/resumo - Resumo do dashboard");
    info!("   GET  /api/estatisticas/vendas-por-dia - Receita por dia");
    info!("📋 Auditoria:");
    info!("   GET  /api/auditoria - Últimas operações registradas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento gracioso
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
