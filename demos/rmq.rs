use direct_rmq::DirectRmq;
use rand::distributions::{Distribution, Uniform};
use rand::{thread_rng, Rng};

const LEN: usize = 1 << 24;

// Runs random queries until interrupted, intended for profiling.
fn main() {
    let sample = Uniform::new(0, u64::MAX);
    let mut rng = thread_rng();

    let mut data = Vec::with_capacity(LEN);
    for _ in 0..LEN {
        data.push(sample.sample(&mut rng));
    }

    let rmq = DirectRmq::new(&data);
    let sample = Uniform::new(0, rmq.len());
    loop {
        let begin = sample.sample(&mut rng);
        let end = begin + rng.gen_range(1..=rmq.len() - begin);
        std::hint::black_box(rmq.query(begin, end, &data));
    }
}
