use arnoldi::{KrylovBasis, arnoldi_step};
use faer::Mat;
use rand::Rng;

fn main() {
    let n = 8;
    let steps = 5;

    // random dense operator and seed
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen::<f64>() - 0.5).collect();
    let a = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    let seed: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();

    let mut basis = KrylovBasis::from_seed(seed).expect("nonzero seed");
    let mut hessenberg: Vec<Vec<f64>> = Vec::with_capacity(steps);

    for k in 0..steps {
        let res = arnoldi_step(&a, &basis, k, None).expect("step failed");
        println!("k = {k}: h = {:?}", res.column);
        hessenberg.push(res.column.clone());
        match res.next {
            Some(v) => basis.push(v),
            None => {
                println!("breakdown at k = {k}: subspace is invariant");
                break;
            }
        }
    }

    println!("basis columns: {}", basis.len());
    println!("hessenberg columns: {}", hessenberg.len());
}
