use crate::{constants::UTM_K0, ellipsoid::Ellipsoid, utility::polyval, Error};

// ================================
// Transverse Mercator Constants
// ================================

// Hoffmann-Wellenhof, Lichtenegger & Collins, GPS: Theory and Practice,
// eq. 10.17 - 10.23. Every coefficient below is n^k times a polynomial in
// n^2, highest power first.

// alpha / ((a + b) / 2), polynomial in n^2 of order 2
const ALPHA_COEFF: [f64; 3] = [1. / 64., 1. / 4., 1.];

// beta, gamma, delta, epsilon of the meridian arc
const ARC_COEFF: [&[f64]; 4] = [
    &[-3. / 32., 9. / 16., -3. / 2.],
    &[-15. / 32., 15. / 16.],
    &[105. / 256., -35. / 48.],
    &[315. / 512.],
];

// beta_, gamma_, delta_, epsilon_ of the footpoint latitude
const FOOT_COEFF: [&[f64]; 4] = [
    &[269. / 512., -27. / 32., 3. / 2.],
    &[-55. / 32., 21. / 16.],
    &[-417. / 128., 151. / 96.],
    &[1097. / 512.],
];

/// Transverse Mercator projection evaluated by truncated power series
/// (degree 8 in the distance from the central meridian).
///
/// The methods here work on the unscaled projection plane with angles in
/// radians; the UTM scale factor and false origin are applied by
/// [`Utm`](crate::Utm).
#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    k0: f64,
    ep2: f64,
    alpha: f64,
    arc: [f64; 4],
    foot: [f64; 4],
}

impl TransverseMercator {
    /// WGS84 with the UTM central scale factor.
    pub fn utm() -> TransverseMercator {
        Self::build(Ellipsoid::WGS84, UTM_K0)
    }

    /// Tries to create a projection on `ellipsoid` with central scale
    /// factor `k0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if `k0` is not finite and positive.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::{Ellipsoid, TransverseMercator};
    ///
    /// let sphere = Ellipsoid::sphere(6_371_000.0).unwrap();
    /// let tm = TransverseMercator::new(sphere, 1.0).unwrap();
    ///
    /// // No flattening, so the meridian arc is just r * phi
    /// assert!((tm.arc_length_of_meridian(0.5) - 3_185_500.0).abs() < 1e-6);
    ///
    /// assert!(TransverseMercator::new(sphere, 0.0).is_err());
    /// ```
    pub fn new(ellipsoid: Ellipsoid, k0: f64) -> Result<TransverseMercator, Error> {
        if !k0.is_finite() || k0 <= 0. {
            return Err(Error::InvalidEllipsoid(format!("Scale factor {k0} must be finite and positive.")));
        }

        Ok(Self::build(ellipsoid, k0))
    }

    fn build(ellipsoid: Ellipsoid, k0: f64) -> TransverseMercator {
        let n = ellipsoid.third_flattening();
        let n2 = n.powi(2);

        let alpha = (ellipsoid.a + ellipsoid.b) / 2. * polyval(&ALPHA_COEFF, n2);

        let mut arc = [0_f64; 4];
        let mut foot = [0_f64; 4];

        let mut d = n;
        for l in 0..4 {
            arc[l] = d * polyval(ARC_COEFF[l], n2);
            foot[l] = d * polyval(FOOT_COEFF[l], n2);
            d *= n;
        }

        Self {
            ellipsoid,
            k0,
            ep2: ellipsoid.second_eccentricity_sq(),
            alpha,
            arc,
            foot,
        }
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Central scale factor
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Distance in meters along the meridian from the equator to latitude
    /// `phi` (radians).
    pub fn arc_length_of_meridian(&self, phi: f64) -> f64 {
        self.alpha * harmonic_sum(&self.arc, phi)
    }

    /// Latitude in radians whose meridian arc length is `y` meters.
    pub fn footpoint_latitude(&self, y: f64) -> f64 {
        harmonic_sum(&self.foot, y / self.alpha)
    }

    /// Projects latitude `phi` and longitude `lambda` onto the plane of the
    /// projection centered on `lambda0`. Returns `(x, y)` in meters.
    pub fn map_latlon_to_xy(&self, phi: f64, lambda: f64, lambda0: f64) -> (f64, f64) {
        let (a, b) = (self.ellipsoid.a, self.ellipsoid.b);

        let c = phi.cos();
        let nu2 = self.ep2 * c.powi(2);
        let big_n = a.powi(2) / (b * (1. + nu2).sqrt());
        let t = phi.tan();
        let t2 = t.powi(2);

        // cos(phi)^k always travels with l^k
        let u = c * (lambda - lambda0);

        let l3coef = 1. - t2 + nu2;
        let l4coef = 5. - t2 + 9. * nu2 + 4. * nu2.powi(2);
        let l5coef = 5. - 18. * t2 + t2.powi(2) + 14. * nu2 - 58. * t2 * nu2;
        let l6coef = 61. - 58. * t2 + t2.powi(2) + 270. * nu2 - 330. * t2 * nu2;
        let l7coef = polyval(&[-1., 179., -479., 61.], t2);
        let l8coef = polyval(&[-1., 543., -3111., 1385.], t2);

        let x = big_n * (
            u
            + l3coef * u.powi(3) / 6.
            + l5coef * u.powi(5) / 120.
            + l7coef * u.powi(7) / 5040.
        );

        let y = self.arc_length_of_meridian(phi) + big_n * t * (
            u.powi(2) / 2.
            + l4coef * u.powi(4) / 24.
            + l6coef * u.powi(6) / 720.
            + l8coef * u.powi(8) / 40320.
        );

        (x, y)
    }

    /// Inverse of [`TransverseMercator::map_latlon_to_xy`]. Returns
    /// `(phi, lambda)` in radians.
    pub fn map_xy_to_latlon(&self, x: f64, y: f64, lambda0: f64) -> (f64, f64) {
        let (a, b) = (self.ellipsoid.a, self.ellipsoid.b);

        let phif = self.footpoint_latitude(y);

        let cf = phif.cos();
        let nuf2 = self.ep2 * cf.powi(2);
        let nf = a.powi(2) / (b * (1. + nuf2).sqrt());
        let tf = phif.tan();
        let tf2 = tf.powi(2);
        let tf4 = tf2.powi(2);

        // Nf^-k always travels with x^k
        let v = x / nf;

        let x2poly = -1. - nuf2;
        let x3poly = -1. - 2. * tf2 - nuf2;
        let x4poly = 5. + 3. * tf2 + 6. * nuf2 - 6. * tf2 * nuf2
            - 3. * nuf2.powi(2) - 9. * tf2 * nuf2.powi(2);
        let x5poly = 5. + 28. * tf2 + 24. * tf4 + 6. * nuf2 + 8. * tf2 * nuf2;
        let x6poly = -61. - 90. * tf2 - 45. * tf4 - 107. * nuf2 + 162. * tf2 * nuf2;
        let x7poly = polyval(&[-720., -1320., -662., -61.], tf2);
        let x8poly = polyval(&[1575., 4095., 3633., 1385.], tf2);

        let phi = phif + tf * (
            x2poly * v.powi(2) / 2.
            + x4poly * v.powi(4) / 24.
            + x6poly * v.powi(6) / 720.
            + x8poly * v.powi(8) / 40320.
        );

        let lambda = lambda0 + (
            v
            + x3poly * v.powi(3) / 6.
            + x5poly * v.powi(5) / 120.
            + x7poly * v.powi(7) / 5040.
        ) / cf;

        (phi, lambda)
    }
}

impl Default for TransverseMercator {
    fn default() -> Self {
        TransverseMercator::utm()
    }
}

/// `x + sum(c[k] * sin(2(k+1)x))`
fn harmonic_sum(coeffs: &[f64; 4], x: f64) -> f64 {
    coeffs
        .iter()
        .zip(1_i32..)
        .fold(x, |acc, (c, k)| acc + c * (f64::from(2 * k) * x).sin())
}
