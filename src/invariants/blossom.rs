//! Exact maximum-weight matching
//!
//! Port of the Galil / van Rantwijk O(n^3) blossom algorithm, the same
//! primal-dual formulation behind networkx's `max_weight_matching`. The
//! matching returned is optimal over all cardinalities; ties are broken
//! deterministically for a fixed input edge order.
//!
//! State is kept in flat arrays indexed by vertex (0..n), blossom
//! (0..2n) and edge endpoint (edge k owns endpoints 2k and 2k+1, and
//! `p ^ 1` flips an endpoint to its partner). `-1` marks an unset slot.
//! Labels: 0 = free, 1 = S, 2 = T, 5 = S with a scan breadcrumb.

struct Solver<'a> {
    edges: &'a [(usize, usize, f64)],
    nvertex: usize,
    /// Vertex sitting at each endpoint
    endpoint: Vec<usize>,
    /// Per vertex, the remote endpoints of its incident edges
    neighbend: Vec<Vec<usize>>,
    /// Matched endpoint per vertex (vertex index after `solve` finishes)
    mate: Vec<isize>,
    label: Vec<u8>,
    /// Endpoint through which a vertex/blossom obtained its label
    labelend: Vec<isize>,
    /// Top-level blossom containing each vertex
    inblossom: Vec<usize>,
    blossomparent: Vec<isize>,
    blossomchilds: Vec<Vec<usize>>,
    blossombase: Vec<isize>,
    /// Endpoints of the edges connecting consecutive sub-blossoms
    blossomendps: Vec<Vec<usize>>,
    /// Least-slack non-allowable edge to a different S-blossom
    bestedge: Vec<isize>,
    blossombestedges: Vec<Option<Vec<usize>>>,
    unusedblossoms: Vec<usize>,
    /// Dual variables: vertices first, then blossoms
    dualvar: Vec<f64>,
    allowedge: Vec<bool>,
    queue: Vec<usize>,
}

impl<'a> Solver<'a> {
    fn new(nvertex: usize, edges: &'a [(usize, usize, f64)]) -> Self {
        let nedge = edges.len();
        let maxweight = edges.iter().map(|e| e.2).fold(0.0_f64, f64::max);
        let endpoint = (0..2 * nedge)
            .map(|p| if p % 2 == 0 { edges[p / 2].0 } else { edges[p / 2].1 })
            .collect();
        let mut neighbend = vec![Vec::new(); nvertex];
        for (k, &(i, j, _)) in edges.iter().enumerate() {
            neighbend[i].push(2 * k + 1);
            neighbend[j].push(2 * k);
        }
        let mut dualvar = vec![maxweight; nvertex];
        dualvar.extend(std::iter::repeat(0.0).take(nvertex));
        let mut blossombase: Vec<isize> = (0..nvertex as isize).collect();
        blossombase.extend(std::iter::repeat(-1).take(nvertex));
        Self {
            edges,
            nvertex,
            endpoint,
            neighbend,
            mate: vec![-1; nvertex],
            label: vec![0; 2 * nvertex],
            labelend: vec![-1; 2 * nvertex],
            inblossom: (0..nvertex).collect(),
            blossomparent: vec![-1; 2 * nvertex],
            blossomchilds: vec![Vec::new(); 2 * nvertex],
            blossombase,
            blossomendps: vec![Vec::new(); 2 * nvertex],
            bestedge: vec![-1; 2 * nvertex],
            blossombestedges: vec![None; 2 * nvertex],
            unusedblossoms: (nvertex..2 * nvertex).collect(),
            dualvar,
            allowedge: vec![false; nedge],
            queue: Vec::new(),
        }
    }

    /// Reduced cost of edge k; zero slack means the edge is tight
    fn slack(&self, k: usize) -> f64 {
        let (i, j, wt) = self.edges[k];
        self.dualvar[i] + self.dualvar[j] - 2.0 * wt
    }

    /// All vertices contained in blossom b
    fn blossom_leaves(&self, b: usize) -> Vec<usize> {
        if b < self.nvertex {
            return vec![b];
        }
        let mut leaves = Vec::new();
        let mut stack = vec![b];
        while let Some(t) = stack.pop() {
            if t < self.nvertex {
                leaves.push(t);
            } else {
                stack.extend(self.blossomchilds[t].iter().copied());
            }
        }
        leaves
    }

    /// Label vertex w (and its top-level blossom) as S (t=1) or T (t=2),
    /// having reached it through endpoint p. Labeling T immediately
    /// labels the mate of its base as S.
    fn assign_label(&mut self, w: usize, t: u8, p: isize) {
        let b = self.inblossom[w];
        debug_assert!(self.label[w] == 0 && self.label[b] == 0);
        self.label[w] = t;
        self.label[b] = t;
        self.labelend[w] = p;
        self.labelend[b] = p;
        self.bestedge[w] = -1;
        self.bestedge[b] = -1;
        if t == 1 {
            let leaves = self.blossom_leaves(b);
            self.queue.extend(leaves);
        } else {
            let base = self.blossombase[b] as usize;
            let mate_p = self.mate[base];
            debug_assert!(mate_p >= 0);
            let mate_p = mate_p as usize;
            self.assign_label(self.endpoint[mate_p], 1, (mate_p ^ 1) as isize);
        }
    }

    /// Trace back from the S-vertices v and w, alternating between both
    /// paths. Returns the base of the new blossom if the paths meet, or
    /// -1 if an augmenting path was discovered instead.
    fn scan_blossom(&mut self, v: usize, w: usize) -> isize {
        let mut path = Vec::new();
        let mut base: isize = -1;
        let mut v = v as isize;
        let mut w = w as isize;
        while v != -1 || w != -1 {
            let b = self.inblossom[v as usize];
            if self.label[b] & 4 != 0 {
                base = self.blossombase[b];
                break;
            }
            debug_assert_eq!(self.label[b], 1);
            path.push(b);
            self.label[b] = 5;
            debug_assert_eq!(self.labelend[b], self.mate[self.blossombase[b] as usize]);
            if self.labelend[b] == -1 {
                // Base of this blossom is single; this path ends here.
                v = -1;
            } else {
                let t = self.endpoint[self.labelend[b] as usize];
                let bt = self.inblossom[t];
                debug_assert_eq!(self.label[bt], 2);
                debug_assert!(self.labelend[bt] >= 0);
                v = self.endpoint[self.labelend[bt] as usize] as isize;
            }
            if w != -1 {
                std::mem::swap(&mut v, &mut w);
            }
        }
        for b in path {
            self.label[b] = 1;
        }
        base
    }

    /// Contract the cycle through `base` closed by edge `edge_k` into a
    /// new S-blossom.
    fn add_blossom(&mut self, base: usize, edge_k: usize) {
        let (mut v, mut w, _) = self.edges[edge_k];
        let bb = self.inblossom[base];
        let mut bv = self.inblossom[v];
        let mut bw = self.inblossom[w];
        let b = self.unusedblossoms.pop().expect("free blossom slot");
        self.blossombase[b] = base as isize;
        self.blossomparent[b] = -1;
        self.blossomparent[bb] = b as isize;

        let mut path = Vec::new();
        let mut endps = Vec::new();
        while bv != bb {
            self.blossomparent[bv] = b as isize;
            path.push(bv);
            endps.push(self.labelend[bv] as usize);
            debug_assert!(self.labelend[bv] >= 0);
            v = self.endpoint[self.labelend[bv] as usize];
            bv = self.inblossom[v];
        }
        path.push(bb);
        path.reverse();
        endps.reverse();
        endps.push(2 * edge_k);
        while bw != bb {
            self.blossomparent[bw] = b as isize;
            path.push(bw);
            endps.push((self.labelend[bw] as usize) ^ 1);
            debug_assert!(self.labelend[bw] >= 0);
            w = self.endpoint[self.labelend[bw] as usize];
            bw = self.inblossom[w];
        }

        debug_assert_eq!(self.label[bb], 1);
        self.label[b] = 1;
        self.labelend[b] = self.labelend[bb];
        self.dualvar[b] = 0.0;
        self.blossomchilds[b] = path.clone();
        self.blossomendps[b] = endps;

        for leaf in self.blossom_leaves(b) {
            if self.label[self.inblossom[leaf]] == 2 {
                // T-vertex turning into an S-vertex; scan it.
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = b;
        }

        // Recompute least-slack edges to neighbouring S-blossoms.
        let mut bestedgeto: Vec<isize> = vec![-1; 2 * self.nvertex];
        for &child in &path {
            let edge_list: Vec<usize> = match self.blossombestedges[child].take() {
                Some(list) => list,
                None => {
                    let mut acc = Vec::new();
                    for leaf in self.blossom_leaves(child) {
                        acc.extend(self.neighbend[leaf].iter().map(|&p| p / 2));
                    }
                    acc
                }
            };
            for k in edge_list {
                let (i, j, _) = self.edges[k];
                // Orient the edge so j is the endpoint outside the new blossom.
                let j = if self.inblossom[j] == b { i } else { j };
                let bj = self.inblossom[j];
                if bj != b
                    && self.label[bj] == 1
                    && (bestedgeto[bj] == -1 || self.slack(k) < self.slack(bestedgeto[bj] as usize))
                {
                    bestedgeto[bj] = k as isize;
                }
            }
            self.bestedge[child] = -1;
        }
        let best: Vec<usize> = bestedgeto
            .into_iter()
            .filter(|&k| k != -1)
            .map(|k| k as usize)
            .collect();
        self.bestedge[b] = -1;
        for &k in &best {
            if self.bestedge[b] == -1 || self.slack(k) < self.slack(self.bestedge[b] as usize) {
                self.bestedge[b] = k as isize;
            }
        }
        self.blossombestedges[b] = Some(best);
    }

    /// Expand blossom b into its sub-blossoms; during a stage, relabel
    /// the sub-blossoms of an expanding T-blossom along the alternating
    /// path through it.
    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        let childs = self.blossomchilds[b].clone();
        for &s in &childs {
            self.blossomparent[s] = -1;
            if s < self.nvertex {
                self.inblossom[s] = s;
            } else if endstage && self.dualvar[s] == 0.0 {
                self.expand_blossom(s, endstage);
            } else {
                for leaf in self.blossom_leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }
        if !endstage && self.label[b] == 2 {
            debug_assert!(self.labelend[b] >= 0);
            let entrychild = self.inblossom[self.endpoint[(self.labelend[b] as usize) ^ 1]];
            let len = childs.len() as isize;
            let wrap = |idx: isize| -> usize { idx.rem_euclid(len) as usize };
            let mut j = childs
                .iter()
                .position(|&c| c == entrychild)
                .expect("entry child in expanding blossom") as isize;
            let (jstep, endptrick): (isize, usize) = if j & 1 != 0 {
                j -= len;
                (1, 0)
            } else {
                (-1, 1)
            };
            let mut p = self.labelend[b] as usize;
            while j != 0 {
                // Relabel the T-sub-blossom.
                let endp = self.blossomendps[b][wrap(j - endptrick as isize)];
                self.label[self.endpoint[p ^ 1]] = 0;
                self.label[self.endpoint[endp ^ endptrick ^ 1]] = 0;
                self.assign_label(self.endpoint[p ^ 1], 2, p as isize);
                // Step to the next S-sub-blossom; its pair edge is tight.
                self.allowedge[endp / 2] = true;
                j += jstep;
                p = self.blossomendps[b][wrap(j - endptrick as isize)] ^ endptrick;
                // Step to the next T-sub-blossom.
                self.allowedge[p / 2] = true;
                j += jstep;
            }
            // Relabel the base T-sub-blossom without stepping through to
            // its mate.
            let bv = childs[wrap(j)];
            let entry = self.endpoint[p ^ 1];
            self.label[entry] = 2;
            self.label[bv] = 2;
            self.labelend[entry] = p as isize;
            self.labelend[bv] = p as isize;
            self.bestedge[bv] = -1;
            // Sub-blossoms between the base and the entry child keep
            // label T only if they were reached from outside.
            j += jstep;
            while childs[wrap(j)] != entrychild {
                let bv = childs[wrap(j)];
                if self.label[bv] == 1 {
                    j += jstep;
                    continue;
                }
                let leaves = self.blossom_leaves(bv);
                let reached = leaves.into_iter().find(|&x| self.label[x] != 0);
                if let Some(v) = reached {
                    debug_assert_eq!(self.label[v], 2);
                    debug_assert_eq!(self.inblossom[v], bv);
                    self.label[v] = 0;
                    let base = self.blossombase[bv] as usize;
                    self.label[self.endpoint[self.mate[base] as usize]] = 0;
                    let le = self.labelend[v];
                    self.assign_label(v, 2, le);
                }
                j += jstep;
            }
        }
        // Recycle the blossom slot.
        self.label[b] = 0;
        self.labelend[b] = -1;
        self.blossomchilds[b].clear();
        self.blossomendps[b].clear();
        self.blossombase[b] = -1;
        self.blossombestedges[b] = None;
        self.bestedge[b] = -1;
        self.unusedblossoms.push(b);
    }

    /// Swap matched and unmatched edges around blossom b so that vertex v
    /// becomes its new base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        let mut t = v;
        while self.blossomparent[t] != b as isize {
            t = self.blossomparent[t] as usize;
        }
        if t >= self.nvertex {
            self.augment_blossom(t, v);
        }
        let childs = self.blossomchilds[b].clone();
        let len = childs.len() as isize;
        let wrap = |idx: isize| -> usize { idx.rem_euclid(len) as usize };
        let i = childs.iter().position(|&c| c == t).expect("sub-blossom") as isize;
        let mut j = i;
        let (jstep, endptrick): (isize, usize) = if i & 1 != 0 {
            j -= len;
            (1, 0)
        } else {
            (-1, 1)
        };
        while j != 0 {
            j += jstep;
            let t = childs[wrap(j)];
            let p = self.blossomendps[b][wrap(j - endptrick as isize)] ^ endptrick;
            if t >= self.nvertex {
                self.augment_blossom(t, self.endpoint[p]);
            }
            j += jstep;
            let t = childs[wrap(j)];
            if t >= self.nvertex {
                self.augment_blossom(t, self.endpoint[p ^ 1]);
            }
            // Match the edge connecting those sub-blossoms.
            self.mate[self.endpoint[p]] = (p ^ 1) as isize;
            self.mate[self.endpoint[p ^ 1]] = p as isize;
        }
        // Rotate so the new base child comes first.
        self.blossomchilds[b].rotate_left(i as usize);
        self.blossomendps[b].rotate_left(i as usize);
        self.blossombase[b] = self.blossombase[self.blossomchilds[b][0]];
        debug_assert_eq!(self.blossombase[b], v as isize);
    }

    /// Augment the matching along the path through tight edge k.
    fn augment_matching(&mut self, k: usize) {
        let (v, w, _) = self.edges[k];
        for (start, start_p) in [(v, 2 * k + 1), (w, 2 * k)] {
            let mut s = start;
            let mut p = start_p;
            loop {
                let bs = self.inblossom[s];
                debug_assert_eq!(self.label[bs], 1);
                debug_assert_eq!(self.labelend[bs], self.mate[self.blossombase[bs] as usize]);
                if bs >= self.nvertex {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = p as isize;
                if self.labelend[bs] == -1 {
                    // Reached a single vertex; stop.
                    break;
                }
                let t = self.endpoint[self.labelend[bs] as usize];
                let bt = self.inblossom[t];
                debug_assert_eq!(self.label[bt], 2);
                debug_assert!(self.labelend[bt] >= 0);
                s = self.endpoint[self.labelend[bt] as usize];
                let j = self.endpoint[(self.labelend[bt] as usize) ^ 1];
                debug_assert_eq!(self.blossombase[bt], t as isize);
                if bt >= self.nvertex {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = self.labelend[bt];
                p = (self.labelend[bt] as usize) ^ 1;
            }
        }
    }

    fn solve(mut self) -> Vec<isize> {
        for _stage in 0..self.nvertex {
            self.label.fill(0);
            self.bestedge.fill(-1);
            for slot in &mut self.blossombestedges[self.nvertex..] {
                *slot = None;
            }
            self.allowedge.fill(false);
            self.queue.clear();
            for v in 0..self.nvertex {
                if self.mate[v] == -1 && self.label[self.inblossom[v]] == 0 {
                    self.assign_label(v, 1, -1);
                }
            }

            let mut augmented = false;
            loop {
                // Substage: scan S-vertices until an augmenting path is
                // found or the queue runs dry.
                while !augmented {
                    let Some(v) = self.queue.pop() else { break };
                    debug_assert_eq!(self.label[self.inblossom[v]], 1);
                    let incident = self.neighbend[v].clone();
                    for p in incident {
                        let k = p / 2;
                        let w = self.endpoint[p];
                        if self.inblossom[v] == self.inblossom[w] {
                            continue;
                        }
                        let mut kslack = 0.0;
                        if !self.allowedge[k] {
                            kslack = self.slack(k);
                            if kslack <= 0.0 {
                                self.allowedge[k] = true;
                            }
                        }
                        if self.allowedge[k] {
                            if self.label[self.inblossom[w]] == 0 {
                                self.assign_label(w, 2, (p ^ 1) as isize);
                            } else if self.label[self.inblossom[w]] == 1 {
                                let base = self.scan_blossom(v, w);
                                if base >= 0 {
                                    self.add_blossom(base as usize, k);
                                } else {
                                    self.augment_matching(k);
                                    augmented = true;
                                    break;
                                }
                            } else if self.label[w] == 0 {
                                // Inside a T-blossom but not yet reached
                                // from outside; needed for expansion.
                                debug_assert_eq!(self.label[self.inblossom[w]], 2);
                                self.label[w] = 2;
                                self.labelend[w] = (p ^ 1) as isize;
                            }
                        } else if self.label[self.inblossom[w]] == 1 {
                            let b = self.inblossom[v];
                            if self.bestedge[b] == -1
                                || kslack < self.slack(self.bestedge[b] as usize)
                            {
                                self.bestedge[b] = k as isize;
                            }
                        } else if self.label[w] == 0
                            && (self.bestedge[w] == -1
                                || kslack < self.slack(self.bestedge[w] as usize))
                        {
                            self.bestedge[w] = k as isize;
                        }
                    }
                }
                if augmented {
                    break;
                }

                // No augmenting path under the current duals; compute the
                // largest slack reduction that keeps them feasible.
                let mut deltatype = 1;
                let mut delta = self.dualvar[..self.nvertex]
                    .iter()
                    .copied()
                    .fold(f64::INFINITY, f64::min);
                let mut deltaedge: isize = -1;
                let mut deltablossom: isize = -1;
                for v in 0..self.nvertex {
                    if self.label[self.inblossom[v]] == 0 && self.bestedge[v] != -1 {
                        let d = self.slack(self.bestedge[v] as usize);
                        if d < delta {
                            delta = d;
                            deltatype = 2;
                            deltaedge = self.bestedge[v];
                        }
                    }
                }
                for b in 0..2 * self.nvertex {
                    if self.blossomparent[b] == -1 && self.label[b] == 1 && self.bestedge[b] != -1
                    {
                        let d = self.slack(self.bestedge[b] as usize) / 2.0;
                        if d < delta {
                            delta = d;
                            deltatype = 3;
                            deltaedge = self.bestedge[b];
                        }
                    }
                }
                for b in self.nvertex..2 * self.nvertex {
                    if self.blossombase[b] >= 0
                        && self.blossomparent[b] == -1
                        && self.label[b] == 2
                        && self.dualvar[b] < delta
                    {
                        delta = self.dualvar[b];
                        deltatype = 4;
                        deltablossom = b as isize;
                    }
                }

                for v in 0..self.nvertex {
                    match self.label[self.inblossom[v]] {
                        1 => self.dualvar[v] -= delta,
                        2 => self.dualvar[v] += delta,
                        _ => {}
                    }
                }
                for b in self.nvertex..2 * self.nvertex {
                    if self.blossombase[b] >= 0 && self.blossomparent[b] == -1 {
                        match self.label[b] {
                            1 => self.dualvar[b] += delta,
                            2 => self.dualvar[b] -= delta,
                            _ => {}
                        }
                    }
                }

                match deltatype {
                    1 => break, // optimum reached
                    2 => {
                        self.allowedge[deltaedge as usize] = true;
                        let (i, j, _) = self.edges[deltaedge as usize];
                        let i = if self.label[self.inblossom[i]] == 0 { j } else { i };
                        debug_assert_eq!(self.label[self.inblossom[i]], 1);
                        self.queue.push(i);
                    }
                    3 => {
                        self.allowedge[deltaedge as usize] = true;
                        let (i, _, _) = self.edges[deltaedge as usize];
                        debug_assert_eq!(self.label[self.inblossom[i]], 1);
                        self.queue.push(i);
                    }
                    _ => self.expand_blossom(deltablossom as usize, false),
                }
            }

            if !augmented {
                break;
            }
            // End of stage: expand S-blossoms whose dual fell to zero.
            for b in self.nvertex..2 * self.nvertex {
                if self.blossomparent[b] == -1
                    && self.blossombase[b] >= 0
                    && self.label[b] == 1
                    && self.dualvar[b] == 0.0
                {
                    self.expand_blossom(b, true);
                }
            }
        }

        for v in 0..self.nvertex {
            if self.mate[v] >= 0 {
                self.mate[v] = self.endpoint[self.mate[v] as usize] as isize;
            }
        }
        self.mate
    }
}

/// Compute a maximum-weight matching over `nvertex` vertices.
///
/// Returns `mate` where `mate[v]` is v's matched partner or -1.
pub(crate) fn max_weight_matching(nvertex: usize, edges: &[(usize, usize, f64)]) -> Vec<isize> {
    if edges.is_empty() || nvertex == 0 {
        return vec![-1; nvertex];
    }
    Solver::new(nvertex, edges).solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_pairs(mate: &[isize]) -> Vec<(usize, usize)> {
        mate.iter()
            .enumerate()
            .filter_map(|(v, &m)| (m >= 0 && v < m as usize).then_some((v, m as usize)))
            .collect()
    }

    #[test]
    fn test_single_edge() {
        let mate = max_weight_matching(2, &[(0, 1, 1.0)]);
        assert_eq!(matched_pairs(&mate), vec![(0, 1)]);
    }

    #[test]
    fn test_path_prefers_heavy_middle() {
        // Middle edge outweighs both side edges together.
        let mate = max_weight_matching(4, &[(0, 1, 2.0), (1, 2, 5.0), (2, 3, 2.0)]);
        assert_eq!(matched_pairs(&mate), vec![(1, 2)]);
    }

    #[test]
    fn test_path_prefers_two_side_edges() {
        let mate = max_weight_matching(4, &[(0, 1, 3.0), (1, 2, 5.0), (2, 3, 3.0)]);
        assert_eq!(matched_pairs(&mate), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_triangle_takes_one_edge() {
        let mate = max_weight_matching(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        assert_eq!(matched_pairs(&mate).len(), 1);
    }

    #[test]
    fn test_odd_cycle_with_pendant() {
        // 5-cycle forces a blossom; the pendant edge frees one more match.
        let edges = [
            (0, 1, 8.0),
            (1, 2, 9.0),
            (2, 3, 10.0),
            (3, 4, 7.0),
            (0, 4, 6.0),
            (4, 5, 4.0),
        ];
        let mate = max_weight_matching(6, &edges);
        assert_eq!(matched_pairs(&mate), vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn test_blossom_relabeled_for_augmentation() {
        // S-blossom {0,1,2} is relabeled as a T-blossom and then used
        // for augmentation through the pendant edges.
        let edges = [
            (0, 1, 9.0),
            (0, 2, 8.0),
            (1, 2, 10.0),
            (0, 3, 5.0),
            (3, 4, 4.0),
            (0, 5, 3.0),
        ];
        let mate = max_weight_matching(6, &edges);
        assert_eq!(matched_pairs(&mate), vec![(0, 5), (1, 2), (3, 4)]);
    }

    #[test]
    fn test_nested_blossom_augment_and_expand() {
        // Nested S-blossom gets augmented through and expanded
        // recursively at the end of the stage.
        let edges = [
            (0, 1, 8.0),
            (0, 2, 8.0),
            (1, 2, 10.0),
            (1, 3, 12.0),
            (2, 4, 12.0),
            (3, 4, 14.0),
            (3, 5, 12.0),
            (4, 6, 12.0),
            (5, 6, 14.0),
            (6, 7, 12.0),
        ];
        let mate = max_weight_matching(8, &edges);
        assert_eq!(matched_pairs(&mate), vec![(0, 1), (2, 4), (3, 5), (6, 7)]);
    }

    #[test]
    fn test_negative_weight_edges_unused() {
        let mate = max_weight_matching(4, &[(0, 1, 2.0), (1, 2, -1.0), (2, 3, -2.0)]);
        assert_eq!(matched_pairs(&mate), vec![(0, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(max_weight_matching(3, &[]), vec![-1, -1, -1]);
    }
}
