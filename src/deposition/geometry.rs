use crate::quantity::Magnitude;

/// 점 증발원과 평면 기판 사이 거리 `r = sqrt(h^2 + ℓ^2)`.
///
/// `h`는 증발원-기판 수직 거리, `ell`은 기판 위 축으로부터의 수평 거리.
pub fn plane_point_distance<V: Magnitude>(h: f64, ell: V) -> V {
    ell.map(|l| (h * h + l * l).sqrt())
}

/// 기판 법선과 증발원 방향 사이 각의 코사인 `cos θ = h / r`.
pub fn plane_point_cos_theta<V: Magnitude>(h: f64, ell: V) -> V {
    plane_point_distance(h, ell).map(|r| h / r)
}
