// src/algorithms/mod.rs
//
// Entry points for the vanishing ideal of Z/m[x1, ..., xn]: the set of polynomials that
// evaluate to zero at every point of (Z/m)^n.
//
// Command          Algorithm                               Needs the basis?
// ───────────────────────────────────────────────────────────────────────────
// direct           enumerate exponent vectors up to s(m)   builds it
// recursive        peel primes off m, reuse basis of m/q   builds it
// normalForm       leading-term reduction                  no
// isZeroFunction   Kalla's substitution search             no
// nonZeroTuple     Kalla's search, returning the point     no
// smarandache      s(m) = least k with m | k!              no
//
// Usage:
//   let ring = RingContext::new(4, 1);
//   let basis = build_vanishing_basis_direct(&ring);   // 2(x-1)(x-2), (x-1)(x-2)(x-3)(x-4)
//   let h = normal_form(&f);                           // x^4 -> x^2

pub mod direct_basis;
pub mod generator;
pub mod normal_form;
pub mod recursive_basis;
pub mod vanishing_monomial;
pub mod zero_function;

use log::info;

use crate::core::operation_counter::OperationCounter;
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::ideal::Ideal;
use crate::polynomial::polynomial::Polynomial;
use direct_basis::DirectBasisBuilder;
use normal_form::NormalFormReducer;
use recursive_basis::RecursiveBasisBuilder;
use zero_function::ZeroFunctionTester;

/// The commands offered on top of the algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VanishingCommand {
    Direct,
    Recursive,
    NormalForm,
    IsZeroFunction,
    NonZeroTuple,
    Smarandache,
}

impl VanishingCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Recursive => "recursive",
            Self::NormalForm => "normalForm",
            Self::IsZeroFunction => "isZeroFunction",
            Self::NonZeroTuple => "nonZeroTuple",
            Self::Smarandache => "smarandache",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Direct => "strong Groebner basis of the vanishing ideal, built directly",
            Self::Recursive => "the same basis, built along the prime factorization of m",
            Self::NormalForm => "normal form of the polynomial without building the basis",
            Self::IsZeroFunction => "1 iff the polynomial vanishes at every point (Kalla's algorithm)",
            Self::NonZeroTuple => "a point where the polynomial does not vanish, or -1 in every entry",
            Self::Smarandache => "least natural number s such that k divides s!",
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Basis(Ideal),
    NormalForm(Polynomial),
    ZeroFunction(bool),
    NonZeroTuple(Vec<i64>),
    Smarandache { n: u64, value: u64 },
}

/// Runs `command` over `ring`. Polynomial arguments are parsed in `ring`.
pub fn execute(
    command: VanishingCommand,
    ring: &RingContext,
    argument: Option<&str>,
    counter: &mut OperationCounter,
) -> Result<CommandResult, String> {
    info!("Running '{}' over {}", command.name(), ring);

    let polynomial = |argument: Option<&str>| -> Result<Polynomial, String> {
        let text = argument.ok_or_else(|| format!("Command '{}' needs a polynomial argument.", command.name()))?;
        Polynomial::parse(*ring, text)
    };

    let result = match command {
        VanishingCommand::Direct => CommandResult::Basis(build_vanishing_basis_direct_instrumented(ring, counter)),
        VanishingCommand::Recursive => CommandResult::Basis(build_vanishing_basis_recursive_instrumented(ring, counter)),
        VanishingCommand::NormalForm => CommandResult::NormalForm(normal_form_instrumented(&polynomial(argument)?, counter)),
        VanishingCommand::IsZeroFunction => {
            CommandResult::ZeroFunction(is_zero_function_instrumented(&polynomial(argument)?, counter))
        }
        VanishingCommand::NonZeroTuple => {
            CommandResult::NonZeroTuple(first_nonzero_tuple_instrumented(&polynomial(argument)?, counter))
        }
        VanishingCommand::Smarandache => {
            let text = argument.ok_or_else(|| "Command 'smarandache' needs a natural number argument.".to_string())?;
            let n = text
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("'{}' is not a natural number.", text))?;
            if n < 1 {
                return Err("The Smarandache function is only defined for n >= 1.".to_string());
            }
            CommandResult::Smarandache { n, value: smarandache(n) }
        }
    };
    Ok(result)
}

pub fn build_vanishing_basis_direct(ring: &RingContext) -> Ideal {
    build_vanishing_basis_direct_instrumented(ring, &mut OperationCounter::disabled())
}

pub fn build_vanishing_basis_direct_instrumented(ring: &RingContext, counter: &mut OperationCounter) -> Ideal {
    DirectBasisBuilder::new(*ring).build(counter)
}

pub fn build_vanishing_basis_recursive(ring: &RingContext) -> Ideal {
    build_vanishing_basis_recursive_instrumented(ring, &mut OperationCounter::disabled())
}

pub fn build_vanishing_basis_recursive_instrumented(ring: &RingContext, counter: &mut OperationCounter) -> Ideal {
    RecursiveBasisBuilder::new(*ring).build(counter)
}

/// The unique normal form of `f` with respect to the vanishing ideal of its ring.
pub fn normal_form(f: &Polynomial) -> Polynomial {
    normal_form_instrumented(f, &mut OperationCounter::disabled())
}

pub fn normal_form_instrumented(f: &Polynomial, counter: &mut OperationCounter) -> Polynomial {
    NormalFormReducer::new(f.ring()).reduce(f, counter)
}

pub fn is_zero_function(f: &Polynomial) -> bool {
    is_zero_function_instrumented(f, &mut OperationCounter::disabled())
}

pub fn is_zero_function_instrumented(f: &Polynomial, counter: &mut OperationCounter) -> bool {
    ZeroFunctionTester::new(f.ring()).is_zero_function(f, counter)
}

pub fn find_nonzero_tuple(f: &Polynomial) -> Option<Vec<u64>> {
    ZeroFunctionTester::new(f.ring()).find_nonzero_tuple(f, &mut OperationCounter::disabled())
}

/// Witness point for `f`, or -1 in every entry iff `f` is the zero function.
pub fn first_nonzero_tuple(f: &Polynomial) -> Vec<i64> {
    first_nonzero_tuple_instrumented(f, &mut OperationCounter::disabled())
}

pub fn first_nonzero_tuple_instrumented(f: &Polynomial, counter: &mut OperationCounter) -> Vec<i64> {
    ZeroFunctionTester::new(f.ring()).first_nonzero_tuple(f, counter)
}

/// Least s such that n divides s!. Panics for n = 0.
pub fn smarandache(n: u64) -> u64 {
    if n < 1 {
        panic!("The Smarandache function is only defined for n >= 1.");
    }
    FactoredNumber::new(n).smarandache()
}
