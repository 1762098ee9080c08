use faer::{unzipped, zipped, ColMut, ColRef, Mat, MatMut};

// Returns the cross product of two vectors
pub fn cross(a: ColRef<f64>, b: ColRef<f64>, mut c: ColMut<f64>) {
    c[0] = a[1] * b[2] - a[2] * b[1];
    c[1] = a[2] * b[0] - a[0] * b[2];
    c[2] = a[0] * b[1] - a[1] * b[0];
}

pub fn vec_tilde(v: ColRef<f64>, mut m: MatMut<f64>) {
    // [0., -v[2], v[1]]
    // [v[2], 0., -v[0]]
    // [-v[1], v[0], 0.]
    m[(0, 0)] = 0.;
    m[(1, 0)] = v[2];
    m[(2, 0)] = -v[1];
    m[(0, 1)] = -v[2];
    m[(1, 1)] = 0.;
    m[(2, 1)] = v[0];
    m[(0, 2)] = v[1];
    m[(1, 2)] = -v[0];
    m[(2, 2)] = 0.;
}

/// Populates `m` with the rotation matrix of Cartesian rotation vector
/// `psi`, transforming vectors from the rotated frame into the
/// enclosing frame.
///
/// # Panics
/// Panics if `psi.nrows() < 3`.
/// Panics if `m.nrows() < 3` or `m.ncols() < 3`.
#[inline]
pub fn rotation_vector_as_matrix(psi: ColRef<f64>, mut m: MatMut<f64>) {
    let angle = psi.norm_l2();
    let mut tilde = Mat::<f64>::zeros(3, 3);
    vec_tilde(psi, tilde.as_mut());
    let tilde_sq = &tilde * &tilde;

    // Rodrigues coefficients, series fallback below the small-angle cutoff
    let (k1, k2) = if angle < 1e-12 {
        (1., 0.5)
    } else {
        (angle.sin() / angle, (1. - angle.cos()) / (angle * angle))
    };

    zipped!(&mut m, &tilde, &tilde_sq)
        .for_each(|unzipped!(mut m, t, t2)| *m = k1 * *t + k2 * *t2);
    m[(0, 0)] += 1.;
    m[(1, 1)] += 1.;
    m[(2, 2)] += 1.;
}

/// Populates `m` with the tangential operator of `psi`, mapping the
/// rotation-vector rate to the angular velocity of the rotated frame
/// expressed in that frame: `omega = T(psi) * psi_dot`.
///
/// # Panics
/// Panics if `psi.nrows() < 3`.
/// Panics if `m.nrows() < 3` or `m.ncols() < 3`.
#[inline]
pub fn tangential_matrix(psi: ColRef<f64>, mut m: MatMut<f64>) {
    let angle = psi.norm_l2();
    let mut tilde = Mat::<f64>::zeros(3, 3);
    vec_tilde(psi, tilde.as_mut());
    let tilde_sq = &tilde * &tilde;

    let (k1, k2) = if angle < 1e-12 {
        (-0.5, 1. / 6.)
    } else {
        (
            (angle.cos() - 1.) / (angle * angle),
            (1. - angle.sin() / angle) / (angle * angle),
        )
    };

    zipped!(&mut m, &tilde, &tilde_sq)
        .for_each(|unzipped!(mut m, t, t2)| *m = k1 * *t + k2 * *t2);
    m[(0, 0)] += 1.;
    m[(1, 1)] += 1.;
    m[(2, 2)] += 1.;
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
