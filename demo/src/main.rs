use async_trait::async_trait;
use catalog_application::dto::{
    CreateProductInput, CreateUserInput, GetJwtInput, ListProductsQuery,
};
use catalog_application::infra::{InMemoryProductGateway, InMemoryUserGateway};
use catalog_application::product_service::{PRODUCT_CREATED, PRODUCT_DELETED, PRODUCT_UPDATED};
use catalog_application::security::{BcryptPasswordHasher, JwtTokenIssuer};
use catalog_application::{AppConfig, ProductService, UserService, telemetry};
use catalog_domain::eventing::{Event, EventDispatcher, EventHandler, InMemoryEventDispatcher};
use catalog_domain::messaging::{InMemoryBroker, MessageBroker};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 发往消息代理的事件信封
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    name: String,
    occurred_at: String,
    payload: serde_json::Value,
}

/// 把领域事件转发到消息代理（生产者）
struct BrokerForwarder {
    broker: Arc<dyn MessageBroker>,
    exchange: String,
}

#[async_trait]
impl EventHandler for BrokerForwarder {
    fn handler_name(&self) -> &str {
        "broker-forwarder"
    }

    async fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        let envelope = Envelope {
            name: event.name().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            payload: event.payload().clone(),
        };
        self.broker
            .publish(&self.exchange, serde_json::to_vec(&envelope)?)
            .await?;
        Ok(())
    }
}

/// 仅记录日志的审计处理器
struct AuditLog;

#[async_trait]
impl EventHandler for AuditLog {
    fn handler_name(&self) -> &str {
        "audit-log"
    }

    async fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = %event.payload(), "audit");
        Ok(())
    }
}

/// 运行前需提供 `JWT_SECRET`：
/// `cp demo/.env.example .env` 或直接导出环境变量。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("info,catalog_domain=debug");
    let config = AppConfig::from_env()?;
    tracing::info!(
        port = config.web_server_port,
        exchange = %config.broker_exchange,
        queue = %config.broker_queue,
        "config loaded"
    );

    // 消息代理：交换机 -> 队列
    let broker = InMemoryBroker::new();
    broker.bind(&config.broker_exchange, &config.broker_queue);

    // 事件分发器：每个商品事件都转发到代理并写审计日志
    let dispatcher = Arc::new(InMemoryEventDispatcher::new());
    let forwarder: Arc<dyn EventHandler> = Arc::new(BrokerForwarder {
        broker: Arc::new(broker.clone()),
        exchange: config.broker_exchange.clone(),
    });
    let audit: Arc<dyn EventHandler> = Arc::new(AuditLog);
    for name in [PRODUCT_CREATED, PRODUCT_UPDATED, PRODUCT_DELETED] {
        dispatcher.register(name, forwarder.clone())?;
        dispatcher.register(name, audit.clone())?;
    }

    // 消费者：逐条处理并确认
    let mut deliveries = broker.consume(&config.broker_queue).await?;
    let consumer = tokio::spawn(async move {
        let mut handled = 0usize;
        while let Some(next) = deliveries.next().await {
            let delivery = match next {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(error = %e, "consume failed");
                    continue;
                }
            };
            match serde_json::from_slice::<Envelope>(delivery.body()) {
                Ok(env) => tracing::info!(
                    tag = delivery.delivery_tag(),
                    event = %env.name,
                    "consumed"
                ),
                Err(e) => tracing::warn!(error = %e, "malformed message"),
            }
            if let Err(e) = delivery.ack().await {
                tracing::warn!(error = %e, "ack failed");
            }
            handled += 1;
            if handled == 4 {
                break;
            }
        }
        handled
    });

    // 生产者：商品用例
    let products = ProductService::new(
        Arc::new(InMemoryProductGateway::new()),
        dispatcher.clone(),
    );
    let keyboard = products
        .create(CreateProductInput {
            name: "Teclado".into(),
            price: 199.9,
        })
        .await?;
    let mouse = products
        .create(CreateProductInput {
            name: "Mouse".into(),
            price: 89.9,
        })
        .await?;
    products
        .update(
            &mouse.id,
            CreateProductInput {
                name: "Mouse sem fio".into(),
                price: 119.9,
            },
        )
        .await?;
    products.delete(&keyboard.id).await?;

    let listed = products
        .list(ListProductsQuery {
            limit: 10,
            ..Default::default()
        })
        .await?;
    tracing::info!(count = listed.len(), "products listed");

    let handled = consumer.await?;
    tracing::info!(handled, unacked = broker.unacked(&config.broker_queue), "consumer done");

    // 用户与令牌
    let users = UserService::new(
        Arc::new(InMemoryUserGateway::new()),
        Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
        Arc::new(JwtTokenIssuer::new(&config.jwt_secret)),
        config.jwt_expires_in,
    );
    users
        .create(CreateUserInput {
            name: "Usuario X".into(),
            email: "usuario@dominio.com".into(),
            password: "123456".into(),
        })
        .await?;
    let token = users
        .issue_token(GetJwtInput {
            email: "usuario@dominio.com".into(),
            password: "123456".into(),
        })
        .await?;
    tracing::info!(token_len = token.access_token.len(), "token issued");

    Ok(())
}
