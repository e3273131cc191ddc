//----------------------------------------
// Fixed rule coefficients, indexed by order - 1
//----------------------------------------

// Closed Newton-Cotes prefactors, as multiples of the step h:
// trapezoid, Simpson 1/3, Simpson 3/8, Boole
pub const NC_PREFACTORS: [f64; 4] = [1.0 / 2.0, 1.0 / 3.0, 3.0 / 8.0, 2.0 / 45.0];

pub const NC_WEIGHTS: [&[f64]; 4] = [
    &[1.0, 1.0],
    &[1.0, 4.0, 1.0],
    &[1.0, 3.0, 3.0, 1.0],
    &[7.0, 32.0, 12.0, 32.0, 7.0],
];

// Legendre roots on [-1, 1] and matching weights
pub const GL_ROOTS: [&[f64]; 5] = [
    &[0.0],
    &[-0.5773502691896257, 0.5773502691896257],
    &[-0.7745966692414834, 0.0, 0.7745966692414834],
    &[
        -0.8611363115940526,
        -0.3399810435848563,
        0.3399810435848563,
        0.8611363115940526,
    ],
    &[
        -0.9061798459386640,
        -0.5384693101056831,
        0.0,
        0.5384693101056831,
        0.9061798459386640,
    ],
];

pub const GL_WEIGHTS: [&[f64]; 5] = [
    &[2.0],
    &[1.0, 1.0],
    &[0.5555555555555556, 0.8888888888888888, 0.5555555555555556],
    &[
        0.3478548451374538,
        0.6521451548625461,
        0.6521451548625461,
        0.3478548451374538,
    ],
    &[
        0.2369268850561891,
        0.4786286704993665,
        0.5688888888888889,
        0.4786286704993665,
        0.2369268850561891,
    ],
];
