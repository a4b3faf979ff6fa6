use brdocs::{cnpj, cpf, pis, rg, voter_title};
use criterion::Criterion;
use std::sync::Arc;
use threadpool::ThreadPool;

pub fn multithread_generation(c: &mut Criterion) {
    let documents = Arc::new(vec![cpf(), cnpj(), pis(), rg(), voter_title()]);

    let num_threads = 32;
    // There are more jobs than threads to test things that may take longer the first time
    // a thread does something (e.g. thread local rng)
    let num_jobs = num_threads * 25;
    let thread_pool = ThreadPool::new(num_threads);

    c.bench_function("generate and validate (multi-threaded)", |b| {
        b.iter(|| {
            for _ in 0..num_jobs {
                let documents = Arc::clone(&documents);
                thread_pool.execute(move || {
                    for document in documents.iter() {
                        let generated = document.generate().unwrap();
                        assert_eq!(document.is_valid(generated.as_str()), Ok(true));
                    }
                });
            }
            thread_pool.join();
        })
    });
}

criterion::criterion_group!(benches, multithread_generation);
criterion::criterion_main!(benches);
