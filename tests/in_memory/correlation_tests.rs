//! Integration tests for the correlation registry through its public API.
//!
//! Producers run on plain OS threads while waiters run on the tokio
//! runtime, mirroring a reply that arrives on an unrelated path.

use crate::in_memory::helpers::correlation_id;
use rendezvous::correlation::{
    CorrelationRegistry, DuplicatePolicy, RegistryConfig, RegistryError, ReplyOutcome,
};
use rstest::rstest;
use std::thread;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reply_from_os_thread_reaches_async_waiter() {
    let registry = CorrelationRegistry::<String>::new();
    let reply = registry
        .register(correlation_id("req-1"))
        .expect("registration should succeed");

    let producer = registry.clone();
    let handle = thread::spawn(move || producer.deliver(&correlation_id("req-1"), "42".to_owned()));

    let outcome = reply.wait_timeout(Duration::from_secs(5)).await;

    assert!(handle.join().expect("producer thread should not panic"));
    assert_eq!(outcome, ReplyOutcome::Delivered("42".to_owned()));
    assert!(registry.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn producer_threads_deliver_to_matching_waiters_only() {
    let registry = CorrelationRegistry::<usize>::with_config(RegistryConfig::default().with_shards(4));
    let replies: Vec<_> = (0..32)
        .map(|n| {
            registry
                .register(correlation_id(&format!("job-{n}")))
                .expect("distinct ids register")
        })
        .collect();

    // Deliver in reverse so completion order differs from registration order.
    let producers: Vec<_> = (0..32)
        .rev()
        .map(|n| {
            let producer = registry.clone();
            thread::spawn(move || producer.deliver(&correlation_id(&format!("job-{n}")), n * 10))
        })
        .collect();
    for producer in producers {
        assert!(producer.join().expect("producer thread should not panic"));
    }

    for (n, reply) in replies.into_iter().enumerate() {
        assert_eq!(reply.wait().await, Some(n * 10));
    }
    assert!(registry.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn late_reply_after_timeout_is_dropped() {
    let registry = CorrelationRegistry::<u8>::new();
    let reply = registry
        .register(correlation_id("slow"))
        .expect("registration should succeed");

    let outcome = reply.wait_timeout(Duration::from_millis(10)).await;

    assert_eq!(outcome, ReplyOutcome::TimedOut);
    assert!(!registry.deliver(&correlation_id("slow"), 1));
    assert!(registry.is_empty());
}

#[rstest]
fn duplicate_policies_differ_only_in_second_registration() {
    let rejecting = CorrelationRegistry::<u8>::new();
    let replacing = CorrelationRegistry::<u8>::with_config(
        RegistryConfig::default()
            .with_shards(2)
            .with_duplicate_policy(DuplicatePolicy::Replace),
    );

    let _kept = rejecting
        .register(correlation_id("dup"))
        .expect("first registration");
    assert!(matches!(
        rejecting.register(correlation_id("dup")),
        Err(RegistryError::DuplicateRegistration(_))
    ));

    let _first = replacing
        .register(correlation_id("dup"))
        .expect("first registration");
    let _second = replacing
        .register(correlation_id("dup"))
        .expect("replacing registration");

    assert_eq!(rejecting.len(), 1);
    assert_eq!(replacing.len(), 1);
}
