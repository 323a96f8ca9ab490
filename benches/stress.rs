use std::time::{Duration, Instant};

use serde_json::json;

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.2}ms, p50={:.2}ms, p95={:.2}ms, p99={:.2}ms, max={:.2}ms",
        latencies.len(),
        avg.as_secs_f64() * 1000.0,
        percentile(latencies, 50.0).as_secs_f64() * 1000.0,
        percentile(latencies, 95.0).as_secs_f64() * 1000.0,
        percentile(latencies, 99.0).as_secs_f64() * 1000.0,
        latencies.last().unwrap().as_secs_f64() * 1000.0,
    );
}

fn booking_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Stress Guest",
        "email": email,
        "checkIn": "2030-01-10",
        "checkOut": "2030-01-12",
    })
}

/// Book then cancel the same guest, sequentially, measuring write latency.
async fn phase1_sequential(client: &reqwest::Client, base: &str) {
    let n = 1000;
    let mut latencies = Vec::with_capacity(n * 2);
    let start = Instant::now();

    for i in 0..n {
        let email = format!("seq{i}@stress.test");

        let t = Instant::now();
        let resp = client
            .post(format!("{base}/booking"))
            .json(&booking_body(&email))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201, "booking failed mid-bench");
        latencies.push(t.elapsed());

        let t = Instant::now();
        client
            .delete(format!("{base}/cancel/{email}"))
            .send()
            .await
            .unwrap();
        latencies.push(t.elapsed());
    }

    let elapsed = start.elapsed();
    let ops = (n * 2) as f64 / elapsed.as_secs_f64();
    println!(
        "  {} book/cancel ops in {:.2}s = {ops:.0} ops/sec",
        n * 2,
        elapsed.as_secs_f64()
    );
    print_latency("write latency", &mut latencies);
}

/// Concurrent guests churning book/cancel cycles against the shared pool.
async fn phase2_concurrent(base: &str) {
    let n_tasks = 8;
    let cycles_per_task = 100;

    let start = Instant::now();
    let mut handles = Vec::new();

    for task in 0..n_tasks {
        let base = base.to_string();
        handles.push(tokio::spawn(async move {
            let client = reqwest::Client::new();
            let mut created = 0usize;
            let mut rejected = 0usize;
            for i in 0..cycles_per_task {
                let email = format!("conc{task}x{i}@stress.test");
                let resp = client
                    .post(format!("{base}/booking"))
                    .json(&booking_body(&email))
                    .send()
                    .await
                    .unwrap();
                match resp.status().as_u16() {
                    201 => {
                        created += 1;
                        client
                            .delete(format!("{base}/cancel/{email}"))
                            .send()
                            .await
                            .unwrap();
                    }
                    // Pool momentarily full — still a served request
                    400 => rejected += 1,
                    other => panic!("unexpected status {other}"),
                }
            }
            (created, rejected)
        }));
    }

    let mut created = 0;
    let mut rejected = 0;
    for h in handles {
        let (c, r) = h.await.unwrap();
        created += c;
        rejected += r;
    }

    let elapsed = start.elapsed();
    let total = n_tasks * cycles_per_task;
    let ops = total as f64 / elapsed.as_secs_f64();
    println!(
        "  {n_tasks} tasks x {cycles_per_task} cycles = {total} attempts ({created} booked, {rejected} rejected) in {:.2}s = {ops:.0} attempts/sec",
        elapsed.as_secs_f64()
    );
}

/// Availability-read latency while writers churn in the background.
async fn phase3_read_under_load(base: &str) {
    let stop = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let mut writer_handles = Vec::new();
    for w in 0..4 {
        let base = base.to_string();
        let stop = stop.clone();
        writer_handles.push(tokio::spawn(async move {
            let client = reqwest::Client::new();
            let mut i = 0u64;
            while !stop.load(std::sync::atomic::Ordering::Relaxed) {
                let email = format!("bg{w}x{i}@stress.test");
                let resp = client
                    .post(format!("{base}/booking"))
                    .json(&booking_body(&email))
                    .send()
                    .await;
                if let Ok(resp) = resp
                    && resp.status().as_u16() == 201
                {
                    let _ = client.delete(format!("{base}/cancel/{email}")).send().await;
                }
                i += 1;
            }
        }));
    }

    let n_readers = 8;
    let reads_per_reader = 250;
    let mut reader_handles = Vec::new();

    for _ in 0..n_readers {
        let base = base.to_string();
        reader_handles.push(tokio::spawn(async move {
            let client = reqwest::Client::new();
            let mut latencies = Vec::with_capacity(reads_per_reader);
            for _ in 0..reads_per_reader {
                let t = Instant::now();
                client
                    .get(format!("{base}/available-rooms?asOf=2030-01-11"))
                    .send()
                    .await
                    .unwrap();
                latencies.push(t.elapsed());
            }
            latencies
        }));
    }

    let mut all_latencies = Vec::new();
    for h in reader_handles {
        all_latencies.extend(h.await.unwrap());
    }

    stop.store(true, std::sync::atomic::Ordering::Relaxed);
    for h in writer_handles {
        let _ = h.await;
    }

    print_latency("availability query", &mut all_latencies);
}

#[tokio::main]
async fn main() {
    let host = std::env::var("INNKEEP_HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port: u16 = std::env::var("INNKEEP_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid INNKEEP_PORT");
    let base = format!("http://{host}:{port}");

    println!("=== innkeep stress benchmark ===");
    println!("target: {base}\n");

    let client = reqwest::Client::new();

    println!("[phase 1] sequential book/cancel throughput");
    phase1_sequential(&client, &base).await;

    println!("\n[phase 2] concurrent booking churn");
    phase2_concurrent(&base).await;

    println!("\n[phase 3] read latency under write load");
    phase3_read_under_load(&base).await;

    println!("\n=== benchmark complete ===");
}
