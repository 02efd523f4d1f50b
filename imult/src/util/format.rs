use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// Formats a linear combination Σ r·x, folding signs of the coefficients 
// into the separators and eliding unit coefficients. 
// A monomial displayed as "1" means the constant term.

pub fn lc<X, R, S>(terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: IntoIterator<Item = (X, R)>
{ 
    let mut res: Vec<String> = vec![];
    
    for (k, (x, r)) in terms.into_iter().enumerate() {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = match r.strip_prefix('-') { 
            Some(r) => ("-", r.to_owned()),
            None    => ("+", r)
        };

        let term = if x == "1" { 
            r
        } else if r == "1" { 
            x
        } else { 
            format!("{r}{x}")
        };

        if k == 0 { 
            let op = if op == "-" { op } else { "" };
            res.push(format!("{op}{term}"));
        } else { 
            res.push(op.to_string());
            res.push(term);
        }
    }

    if res.is_empty() { 
        String::from("0")
    } else { 
        res.join(" ")
    }
}

pub fn superscript(d: usize) -> String { 
    d.to_string().chars().map(|c| match c { 
        '1' => '\u{00B9}',
        '2' => '\u{00B2}',
        '3' => '\u{00B3}',
        c   => {
            let d = c.to_digit(10).unwrap_or(0);
            char::from_u32(('\u{2070}' as u32) + d).unwrap_or(c)
        }
    }).collect()
}

// `x`, `x^2` (or `x²` when `unicode`), and "1" for the zeroth power. 

pub fn fmt_mono(x: &str, d: usize, unicode: bool) -> String { 
    match d { 
        0 => String::from("1"),
        1 => x.to_string(),
        _ if unicode => format!("{x}{}", superscript(d)),
        _ => format!("{x}^{d}")
    }
}

// Monomial x^a y^b. 

pub fn fmt_mono2(x: &str, y: &str, a: usize, b: usize, unicode: bool) -> String { 
    [fmt_mono(x, a, unicode), fmt_mono(y, b, unicode)]
        .into_iter()
        .filter(|s| s != "1")
        .reduce(|s, t| s + &t)
        .unwrap_or(String::from("1"))
}
