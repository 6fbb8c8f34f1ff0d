use contracts::dashboards::d100_sales_analytics::{
    AnalyticsError, AnalyticsRequest, AnalyticsResponse, AnalyticsResult,
};
use tokio::sync::{mpsc, oneshot};

use super::service;

/// Граница между вызывающим контекстом и вычислением.
///
/// Запросы уходят воркеру через mpsc-канал; каждый запрос считается
/// в собственной задаче tokio над собственным снимком данных, общего
/// изменяемого состояния нет. Ответы приходят в порядке завершения,
/// сопоставление — по `request_id`.
#[derive(Clone)]
pub struct AnalyticsDispatcher {
    tx: mpsc::Sender<Envelope>,
}

struct Envelope {
    request: AnalyticsRequest,
    reply: oneshot::Sender<AnalyticsResponse>,
}

impl AnalyticsDispatcher {
    /// Запустить воркер и вернуть хэндл для отправки запросов
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::channel::<Envelope>(64);

        tokio::spawn(async move {
            tracing::info!("Analytics dispatcher started");
            while let Some(envelope) = rx.recv().await {
                // Запросы независимы — обрабатываем параллельно
                tokio::spawn(async move {
                    let response = service::execute(envelope.request);
                    // Вызывающий мог отвалиться, не дождавшись ответа
                    let _ = envelope.reply.send(response);
                });
            }
            tracing::info!("Analytics dispatcher stopped");
        });

        Self { tx }
    }

    /// Отправить запрос и дождаться ответа.
    ///
    /// Повторов и отмены нет: сбой канала возвращается как
    /// TRANSPORT_ERROR, а не маскируется нулевым результатом.
    pub async fn submit(&self, request: AnalyticsRequest) -> AnalyticsResult<AnalyticsResponse> {
        let request_id = request.request_id.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(Envelope {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| {
                AnalyticsError::transport("Analytics worker is not running")
                    .with_details(format!("request {} was not submitted", request_id))
            })?;

        reply_rx
            .await
            .map_err(|_| AnalyticsError::transport("Analytics worker dropped the reply channel"))
    }
}
