mod util;
use util::{core_cycles, median_cost};

use clampdelta::CurveFamily;
use num_bigint::BigUint;

fn main() {
    let mut bx = 0u8;

    for &c in CurveFamily::ALL.iter() {
        let g = c.group();
        let z = BigUint::from(core_cycles());
        let mut sk = g.clamp(&(&z * &z * &z));
        let d = g.clamp(&(&z * &z));

        let v = median_cost(100, 100, || {
            let (r, _) = g.delta_multiply(&d, &sk);
            sk = r;
        });
        bx ^= sk.to_bytes_le()[0];
        println!("{:6} delta_multiply:        {:13.2}", c.name(), v);

        let ranges = c.invalid_ranges();
        let r = &ranges[0];
        let ub = &r.upper + 1u32;
        let ub = if ub > *g.order() { g.order().clone() } else { ub };
        let v = median_cost(20, 10, || {
            if let Ok(bd) = g.bad_delta(&sk, &r.lower, &ub) {
                sk = bd;
            }
        });
        bx ^= sk.to_bytes_le()[0];
        println!("{:6} bad_delta:             {:13.2}", c.name(), v);
    }

    println!("{}", bx);
}
