// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod calendar;
pub mod chemistry;
pub mod cycling;
pub mod usage;
