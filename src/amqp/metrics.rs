use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter_vec, register_int_gauge_vec, IntCounter, IntCounterVec, IntGauge,
    IntGaugeVec,
};

const LABELS: &[&str] = &["amqp_queue", "amqp_exchange"];

static AMQP_CONSUMERS: Lazy<IntGaugeVec> = Lazy::new(|| {
    register_int_gauge_vec!(
        "amqp_consumers_total",
        "The total number of consumers connected to the queue that is subscribed to the exchange",
        LABELS
    )
    .expect("Failed to register amqp_consumers_total metric")
});

static AMQP_MESSAGES_RECV: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "amqp_messages_recv_total",
        "The total number of received messages",
        LABELS
    )
    .expect("Failed to register amqp_messages_recv_total metric")
});

static AMQP_MESSAGES_ACK: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "amqp_messages_ack_total",
        "The total number of acknowledged messages",
        LABELS
    )
    .expect("Failed to register amqp_messages_ack_total metric")
});

static AMQP_MESSAGES_NACK: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "amqp_messages_nack_total",
        "The total number of negatively acknowledged messages",
        LABELS
    )
    .expect("Failed to register amqp_messages_nack_total metric")
});

static AMQP_MESSAGES_REJECT: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "amqp_messages_reject_total",
        "The total number of rejected messages",
        LABELS
    )
    .expect("Failed to register amqp_messages_reject_total metric")
});

/// Metric handles for one subscription, labeled by its (queue, exchange) pair.
#[derive(Clone)]
pub(crate) struct SubscriptionMetrics {
    pub(crate) active_consumers: IntGauge,
    pub(crate) messages_consumed: IntCounter,
    pub(crate) messages_acked: IntCounter,
    pub(crate) messages_nacked: IntCounter,
    #[allow(dead_code)] // registered for parity with the metrics surface, never incremented here
    pub(crate) messages_rejected: IntCounter,
}

impl SubscriptionMetrics {
    pub(crate) fn for_subscription(queue_name: &str, exchange_name: &str) -> Self {
        let labels = &[queue_name, exchange_name];
        Self {
            active_consumers: AMQP_CONSUMERS.with_label_values(labels),
            messages_consumed: AMQP_MESSAGES_RECV.with_label_values(labels),
            messages_acked: AMQP_MESSAGES_ACK.with_label_values(labels),
            messages_nacked: AMQP_MESSAGES_NACK.with_label_values(labels),
            messages_rejected: AMQP_MESSAGES_REJECT.with_label_values(labels),
        }
    }
}
