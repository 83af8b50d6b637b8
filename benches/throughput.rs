use cashpoint::{run, run_async};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use std::time::Duration;
use tokio::runtime::Runtime;

struct NoopWriter;

impl io::Write for NoopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Just return the length of input without actually writing
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn process_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(6_000)); // 6K requests in the input file
    group.measurement_time(Duration::from_secs(30));
    group.sample_size(50);

    group.bench_function("sync_process_1000_accounts_6K_requests", |b| {
        b.iter(|| {
            run("data/1000_accounts.csv", NoopWriter).unwrap();
        });
    });

    group.bench_function("async_process_1000_accounts_6K_requests", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt)
            .iter(|| async { run_async("data/1000_accounts.csv", NoopWriter).await.unwrap() });
    });

    group.finish();
}

criterion_group!(benches, process_requests);
criterion_main!(benches);
