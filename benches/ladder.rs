mod util;
use util::{core_cycles, median_cost};

use clampdelta::x25519::{x25519_vartime, x25519_base_vartime};
use clampdelta::x448::{x448_vartime, x448_base_vartime};

fn seed<const N: usize>() -> [u8; N] {
    let z = core_cycles().to_le_bytes();
    let mut b = [0u8; N];
    for (i, x) in b.iter_mut().enumerate() {
        *x = z[i & 7];
    }
    b
}

fn main() {
    let mut bx = 0u8;

    let mut b: [u8; 32] = seed();
    let v = median_cost(20, 10, || b = x25519_vartime(&b, &b));
    bx ^= b[0];
    println!("X25519 (generic, vartime):     {:13.2}", v);
    let v = median_cost(20, 10, || b = x25519_base_vartime(&b));
    bx ^= b[0];
    println!("X25519 (base point, vartime):  {:13.2}", v);

    let mut b: [u8; 56] = seed();
    let v = median_cost(20, 10, || b = x448_vartime(&b, &b));
    bx ^= b[0];
    println!("X448 (generic, vartime):       {:13.2}", v);
    let v = median_cost(20, 10, || b = x448_base_vartime(&b));
    bx ^= b[0];
    println!("X448 (base point, vartime):    {:13.2}", v);

    println!("{}", bx);
}
