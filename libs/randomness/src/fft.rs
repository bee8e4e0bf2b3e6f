// [libs/randomness/src/fft.rs]
/*!
 * =================================================================
 * APARATO: TRANSFORMADA DISCRETA DE FOURIER (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: MAGNITUD DEL ESPECTRO PARA EL TEST SPECTRAL (§4.I)
 *
 * El original delega a `scipy.fftpack.fft`. Ninguna crate de FFT forma
 * parte del stack heredado (ver Cargo.toml raíz), así que se implementa
 * aquí una Cooley-Tukey radix-2 iterativa de bajo nivel sobre un par de
 * `f64` (sin introducir `num-complex`): la entrada se rellena con ceros
 * a la potencia de 2 superior, como recomienda el propio NIST SP 800-22
 * §3.6 para el test Spectral.
 * =================================================================
 */

#[derive(Clone, Copy, Debug)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    fn mul(self, other: Complex) -> Complex {
        Complex::new(self.re * other.re - self.im * other.im, self.re * other.im + self.im * other.re)
    }

    fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }
}

fn bit_reverse_permute(a: &mut [Complex]) {
    let n = a.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            a.swap(i, j);
        }
    }
}

fn fft_in_place(a: &mut [Complex]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    bit_reverse_permute(a);
    let mut len = 2;
    while len <= n {
        let angle = -2.0 * std::f64::consts::PI / len as f64;
        let w_len = Complex::new(angle.cos(), angle.sin());
        let mut start = 0;
        while start < n {
            let mut w = Complex::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = a[start + k];
                let v = a[start + k + len / 2].mul(w);
                a[start + k] = u.add(v);
                a[start + k + len / 2] = u.sub(v);
                w = w.mul(w_len);
            }
            start += len;
        }
        len *= 2;
    }
}

/// Devuelve los valores absolutos de la FFT de `x`, igual que `util.Dft`.
/// La entrada se rellena con ceros hasta la potencia de 2 superior; el
/// resultado tiene esa longitud (igual o mayor que `x.len()`).
#[must_use]
pub fn dft_magnitudes(x: &[i8]) -> Vec<f64> {
    let n = x.len().next_power_of_two().max(1);
    let mut a: Vec<Complex> = x.iter().map(|&v| Complex::new(f64::from(v), 0.0)).collect();
    a.resize(n, Complex::new(0.0, 0.0));
    fft_in_place(&mut a);
    a.iter().map(|c| c.abs()).collect()
}
