//! 8-connected component labeling within a single color group.

/// Neighbor offsets for 8-connectivity.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ABSENT: u8 = 0;
const MEMBER: u8 = 1;
const SEEN: u8 = 2;

/// Reusable labeling state for one canvas.
///
/// The `width * height` state array is allocated once; each call marks
/// and then clears only the cells of the group it was given, so labeling
/// many groups costs the sum of their sizes rather than one canvas each.
#[derive(Debug)]
pub struct ComponentFinder {
    width: usize,
    height: usize,
    // Membership and visited state, keyed by y * width + x.
    state: Vec<u8>,
    stack: Vec<usize>,
}

impl ComponentFinder {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self {
            width: w,
            height: h,
            state: vec![ABSENT; w * h],
            stack: Vec::new(),
        }
    }

    fn index(&self, (x, y): (u32, u32)) -> Option<usize> {
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Partition a group's pixels into 8-connected components.
    ///
    /// Components are returned in the order their first pixel appears in
    /// `pixels`; each component lists its pixels in traversal order. Uses an
    /// explicit work stack, so a component may be as large as the image.
    /// Pixels outside the canvas are ignored.
    pub fn find(&mut self, pixels: &[(u32, u32)]) -> Vec<Vec<(u32, u32)>> {
        let w = self.width;
        let h = self.height;
        for &p in pixels {
            if let Some(i) = self.index(p) {
                self.state[i] = MEMBER;
            }
        }

        let mut components = Vec::new();
        for &p in pixels {
            let Some(start) = self.index(p) else {
                continue;
            };
            if self.state[start] != MEMBER {
                continue;
            }

            let mut component = Vec::new();
            self.state[start] = SEEN;
            self.stack.push(start);

            while let Some(p) = self.stack.pop() {
                let px = (p % w) as i64;
                let py = (p / w) as i64;
                component.push((px as u32, py as u32));

                for &(dx, dy) in &NEIGHBORS {
                    let nx = px + dx;
                    let ny = py + dy;
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    let nb = ny as usize * w + nx as usize;
                    if self.state[nb] == MEMBER {
                        self.state[nb] = SEEN;
                        self.stack.push(nb);
                    }
                }
            }

            components.push(component);
        }

        for &p in pixels {
            if let Some(i) = self.index(p) {
                self.state[i] = ABSENT;
            }
        }
        components
    }

    /// True when no cell is left marked from a previous call.
    #[cfg(test)]
    fn is_clear(&self) -> bool {
        self.state.iter().all(|&s| s == ABSENT)
    }
}

/// One-shot [`ComponentFinder::find`] on a fresh canvas.
pub fn find_components(pixels: &[(u32, u32)], width: u32, height: u32) -> Vec<Vec<(u32, u32)>> {
    ComponentFinder::new(width, height).find(pixels)
}
